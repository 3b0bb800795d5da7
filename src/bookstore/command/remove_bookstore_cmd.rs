use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::bookstore::domain::BookstoreService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookstoreCommand {
    bookstore_service: Arc<dyn BookstoreService>,
}

impl RemoveBookstoreCommand {
    pub(crate) fn new(bookstore_service: Arc<dyn BookstoreService>) -> Self {
        Self {
            bookstore_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookstoreCommandRequest {
    pub(crate) bookstore_id: String,
}

impl RemoveBookstoreCommandRequest {
    pub fn new(bookstore_id: String) -> Self {
        Self {
            bookstore_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookstoreCommandResponse {}

impl RemoveBookstoreCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookstoreCommandRequest, RemoveBookstoreCommandResponse> for RemoveBookstoreCommand {
    async fn execute(&self, req: RemoveBookstoreCommandRequest) -> Result<RemoveBookstoreCommandResponse, CommandError> {
        self.bookstore_service.remove_bookstore(req.bookstore_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookstoreCommandResponse::new())
    }
}
