use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::bookstore::domain::BookstoreService;
use crate::bookstore::dto::BookstoreDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBookstoresCommand {
    bookstore_service: Arc<dyn BookstoreService>,
}

impl ListBookstoresCommand {
    pub(crate) fn new(bookstore_service: Arc<dyn BookstoreService>) -> Self {
        Self {
            bookstore_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBookstoresCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct ListBookstoresCommandResponse {
    pub bookstores: Vec<BookstoreDto>,
}

impl ListBookstoresCommandResponse {
    pub fn new(bookstores: Vec<BookstoreDto>) -> Self {
        Self {
            bookstores,
        }
    }
}

#[async_trait]
impl Command<ListBookstoresCommandRequest, ListBookstoresCommandResponse> for ListBookstoresCommand {
    async fn execute(&self, _req: ListBookstoresCommandRequest) -> Result<ListBookstoresCommandResponse, CommandError> {
        self.bookstore_service.find_all_bookstores()
            .await.map_err(CommandError::from).map(ListBookstoresCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::bookstore::command::add_bookstore_cmd::{AddBookstoreCommand, AddBookstoreCommandRequest};
    use crate::bookstore::command::list_bookstores_cmd::{ListBookstoresCommand, ListBookstoresCommandRequest};
    use serde_json::json;
    use crate::bookstore::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref CMDS : AsyncOnce<(AddBookstoreCommand, ListBookstoresCommand)> = AsyncOnce::new(async {
                let svc = factory::create_bookstore_service(&Configuration::new(RepositoryStore::Memory)).await
                    .expect("should build memory service");
                (AddBookstoreCommand::new(svc.clone()), ListBookstoresCommand::new(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_list_bookstores() {
        let (add_cmd, list_cmd) = CMDS.get().await;

        let added = add_cmd.execute(AddBookstoreCommandRequest::new(json!({"Author": "Frank Herbert", "Title": "Dune", "Pages": 412})))
            .await.expect("should add bookstore");
        let res = list_cmd.execute(ListBookstoresCommandRequest::default()).await.expect("should list bookstores");
        assert!(res.bookstores.contains(&added.bookstore));
    }
}
