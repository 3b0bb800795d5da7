use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::bookstore::command::add_bookstore_cmd::{AddBookstoreCommand, AddBookstoreCommandRequest};
use crate::bookstore::command::get_bookstore_cmd::{GetBookstoreCommand, GetBookstoreCommandRequest};
use crate::bookstore::command::list_bookstores_cmd::{ListBookstoresCommand, ListBookstoresCommandRequest};
use crate::bookstore::command::remove_bookstore_cmd::{RemoveBookstoreCommand, RemoveBookstoreCommandRequest};
use crate::bookstore::command::update_bookstore_cmd::{UpdateBookstoreCommand, UpdateBookstoreCommandRequest};
use crate::bookstore::dto::BookstoreDto;
use crate::core::command::Command;
use crate::core::controller::{AppState, parse_body, ServerError};

pub(crate) const ADDED_MESSAGE: &str = "Bookstore added!";
pub(crate) const UPDATED_MESSAGE: &str = "Bookstore updated!";
pub(crate) const DELETED_MESSAGE: &str = "Bookstore deleted.";

const ADD_SEGMENT: &str = "add";

pub(crate) async fn find_all_bookstores(
    State(state): State<AppState>) -> Result<Json<Vec<BookstoreDto>>, ServerError> {
    let res = ListBookstoresCommand::new(state.service).execute(ListBookstoresCommandRequest::default()).await?;
    Ok(Json(res.bookstores))
}

pub(crate) async fn find_bookstore_by_id(
    State(state): State<AppState>,
    Path(bookstore_id): Path<String>) -> Result<Json<Option<BookstoreDto>>, ServerError> {
    let req = GetBookstoreCommandRequest::new(bookstore_id);
    let res = GetBookstoreCommand::new(state.service).execute(req).await?;
    Ok(Json(res.bookstore))
}

// GET on the add path is a lookup of the identifier "add", like any other segment.
async fn find_bookstore_at_add_segment(
    state: State<AppState>) -> Result<Json<Option<BookstoreDto>>, ServerError> {
    find_bookstore_by_id(state, Path(ADD_SEGMENT.to_string())).await
}

pub(crate) async fn add_bookstore(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<String>, ServerError> {
    let req = AddBookstoreCommandRequest::new(parse_body(&body)?);
    let _ = AddBookstoreCommand::new(state.service).execute(req).await?;
    Ok(Json(ADDED_MESSAGE.to_string()))
}

pub(crate) async fn update_bookstore(
    State(state): State<AppState>,
    Path(bookstore_id): Path<String>,
    body: Bytes) -> Result<Json<String>, ServerError> {
    let req = UpdateBookstoreCommandRequest::new(bookstore_id.as_str(), parse_body(&body)?);
    let _ = UpdateBookstoreCommand::new(state.service).execute(req).await?;
    Ok(Json(UPDATED_MESSAGE.to_string()))
}

pub(crate) async fn remove_bookstore(
    State(state): State<AppState>,
    Path(bookstore_id): Path<String>) -> Result<Json<String>, ServerError> {
    let req = RemoveBookstoreCommandRequest::new(bookstore_id);
    let _ = RemoveBookstoreCommand::new(state.service).execute(req).await?;
    Ok(Json(DELETED_MESSAGE.to_string()))
}

// Mounts the five routes under the configured base path, open to any origin.
pub(crate) fn build_router(state: AppState) -> Router {
    let base = state.config.base_path.trim_end_matches('/').to_string();
    let mut router = Router::new()
        .route(format!("{}/", base).as_str(), get(find_all_bookstores))
        .route(format!("{}/{}", base, ADD_SEGMENT).as_str(), post(add_bookstore).get(find_bookstore_at_add_segment))
        .route(format!("{}/update/:id", base).as_str(), put(update_bookstore))
        .route(format!("{}/delete/:id", base).as_str(), delete(remove_bookstore))
        .route(format!("{}/:id", base).as_str(), get(find_bookstore_by_id));
    if !base.is_empty() {
        router = router.route(base.as_str(), get(find_all_bookstores));
    }
    router
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
