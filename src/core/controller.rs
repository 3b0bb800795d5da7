use std::sync::Arc;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Map, Value};
use tracing::warn;
use crate::bookstore::domain::BookstoreService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) service: Arc<dyn BookstoreService>,
}

impl AppState {
    pub fn new(config: Configuration, service: Arc<dyn BookstoreService>) -> AppState {
        AppState {
            config,
            service,
        }
    }
}

// Every error body is a JSON string prefixed with "Error: ".
pub(crate) type ServerError = (StatusCode, Json<String>);

pub(crate) fn error_body(message: impl std::fmt::Display) -> Json<String> {
    Json(format!("Error: {}", message))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, error_body(err))
}

// An empty body is read as an empty object so that missing fields surface as
// validation errors rather than parse errors. Only objects and arrays are accepted
// as a top level value.
pub(crate) fn parse_body(body: &Bytes) -> Result<Value, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    match serde_json::from_slice(body).map_err(json_to_server_error)? {
        json @ (Value::Object(_) | Value::Array(_)) => Ok(json),
        other => Err((StatusCode::BAD_REQUEST,
                      error_body(format!("SyntaxError: unexpected {} body, expected an object or array", other)))),
    }
}

// Only not-found is told apart; validation and store failures share 400.
impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, error_body(err))
            }
            CommandError::Database { retryable, .. } | CommandError::Runtime { retryable, .. } => {
                warn!(error = %err, retryable, "bookstore store failure");
                (StatusCode::BAD_REQUEST, error_body(err))
            }
            CommandError::DuplicateKey { .. }
            | CommandError::Serialization { .. }
            | CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, error_body(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Bytes;
    use axum::http::StatusCode;
    use serde_json::json;
    use crate::core::command::CommandError;
    use crate::core::controller::{parse_body, ServerError};

    #[tokio::test]
    async fn test_should_map_not_found_to_404() {
        let (status, body) = ServerError::from(CommandError::NotFound { message: "Bookstore not found".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("Error: Bookstore not found", body.0);
    }

    #[tokio::test]
    async fn test_should_collapse_store_and_validation_errors_to_400() {
        let (status, body) = ServerError::from(CommandError::Database {
            message: "connection refused".to_string(), reason_code: None, retryable: true });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("Error: connection refused", body.0);

        let (status, _) = ServerError::from(CommandError::Validation {
            message: "Title is required".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_parse_body() {
        assert_eq!(json!({}), parse_body(&Bytes::from_static(b"")).expect("should parse empty"));
        assert_eq!(json!({"Pages": 3}), parse_body(&Bytes::from_static(b"{\"Pages\": 3}")).expect("should parse"));
        assert_eq!(json!(["Dune"]), parse_body(&Bytes::from_static(b"[\"Dune\"]")).expect("should parse array"));
        let (status, body) = parse_body(&Bytes::from_static(b"{oops")).expect_err("should fail");
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(body.0.starts_with("Error: "));
        let (status, _) = parse_body(&Bytes::from_static(b"412")).expect_err("should reject scalar body");
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }
}
