use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::bookstore::domain::BookstoreService;
use crate::bookstore::dto::BookstoreDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookstoreCommand {
    bookstore_service: Arc<dyn BookstoreService>,
}

impl GetBookstoreCommand {
    pub(crate) fn new(bookstore_service: Arc<dyn BookstoreService>) -> Self {
        Self {
            bookstore_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookstoreCommandRequest {
    pub(crate) bookstore_id: String,
}

impl GetBookstoreCommandRequest {
    pub fn new(bookstore_id: String) -> Self {
        Self {
            bookstore_id,
        }
    }
}

// bookstore is None when nothing matches, which the controller renders as null
#[derive(Debug, Serialize)]
pub(crate) struct GetBookstoreCommandResponse {
    pub bookstore: Option<BookstoreDto>,
}

impl GetBookstoreCommandResponse {
    pub fn new(bookstore: Option<BookstoreDto>) -> Self {
        Self {
            bookstore,
        }
    }
}

#[async_trait]
impl Command<GetBookstoreCommandRequest, GetBookstoreCommandResponse> for GetBookstoreCommand {
    async fn execute(&self, req: GetBookstoreCommandRequest) -> Result<GetBookstoreCommandResponse, CommandError> {
        self.bookstore_service.find_bookstore_by_id(req.bookstore_id.as_str())
            .await.map_err(CommandError::from).map(GetBookstoreCommandResponse::new)
    }
}
