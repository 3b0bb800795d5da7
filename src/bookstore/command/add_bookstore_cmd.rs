use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use crate::bookstore::domain::BookstoreService;
use crate::bookstore::dto::BookstoreDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookstoreCommand {
    bookstore_service: Arc<dyn BookstoreService>,
}

impl AddBookstoreCommand {
    pub(crate) fn new(bookstore_service: Arc<dyn BookstoreService>) -> Self {
        Self {
            bookstore_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookstoreCommandRequest {
    pub(crate) bookstore: Value,
}

impl AddBookstoreCommandRequest {
    pub fn new(bookstore: Value) -> Self {
        Self {
            bookstore,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookstoreCommandResponse {
    pub bookstore: BookstoreDto,
}

impl AddBookstoreCommandResponse {
    pub fn new(bookstore: BookstoreDto) -> Self {
        Self {
            bookstore,
        }
    }
}

#[async_trait]
impl Command<AddBookstoreCommandRequest, AddBookstoreCommandResponse> for AddBookstoreCommand {
    async fn execute(&self, req: AddBookstoreCommandRequest) -> Result<AddBookstoreCommandResponse, CommandError> {
        self.bookstore_service.add_bookstore(&req.bookstore)
            .await.map_err(CommandError::from).map(AddBookstoreCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::bookstore::command::add_bookstore_cmd::{AddBookstoreCommand, AddBookstoreCommandRequest};
    use serde_json::json;
    use crate::bookstore::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddBookstoreCommand> = AsyncOnce::new(async {
                let svc = factory::create_bookstore_service(&Configuration::new(RepositoryStore::Memory)).await
                    .expect("should build memory service");
                AddBookstoreCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_bookstore() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookstoreCommandRequest::new(json!({"Author": "Frank Herbert", "Title": "Dune", "Pages": 412})))
            .await.expect("should add bookstore");
        assert!(!res.bookstore.bookstore_id.is_empty());
        assert_eq!(Some("Dune"), res.bookstore.title.as_deref());
    }

    #[tokio::test]
    async fn test_should_not_run_add_bookstore_without_pages() {
        let cmd = SUT_CMD.get().await;

        let input = json!({"Author": "Frank Herbert", "Title": "Dune"});
        let err = cmd.execute(AddBookstoreCommandRequest::new(input)).await.expect_err("should fail validation");
        assert!(matches!(err, CommandError::Validation { .. }));
    }
}
