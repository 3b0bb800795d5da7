use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use crate::bookstore::domain::BookstoreService;
use crate::bookstore::dto::BookstoreDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookstoreCommand {
    bookstore_service: Arc<dyn BookstoreService>,
}

impl UpdateBookstoreCommand {
    pub(crate) fn new(bookstore_service: Arc<dyn BookstoreService>) -> Self {
        Self {
            bookstore_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookstoreCommandRequest {
    pub bookstore_id: String,
    pub bookstore: Value,
}

impl UpdateBookstoreCommandRequest {
    pub fn new(bookstore_id: &str, bookstore: Value) -> Self {
        Self {
            bookstore_id: bookstore_id.to_string(),
            bookstore,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookstoreCommandResponse {
    pub bookstore: BookstoreDto,
}

impl UpdateBookstoreCommandResponse {
    pub fn new(bookstore: BookstoreDto) -> Self {
        Self {
            bookstore,
        }
    }
}

#[async_trait]
impl Command<UpdateBookstoreCommandRequest, UpdateBookstoreCommandResponse> for UpdateBookstoreCommand {
    async fn execute(&self, req: UpdateBookstoreCommandRequest) -> Result<UpdateBookstoreCommandResponse, CommandError> {
        self.bookstore_service.update_bookstore(req.bookstore_id.as_str(), &req.bookstore)
            .await.map_err(CommandError::from).map(UpdateBookstoreCommandResponse::new)
    }
}
