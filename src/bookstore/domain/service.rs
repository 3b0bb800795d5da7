use async_trait::async_trait;
use serde_json::Value;
use tracing::info;
use crate::bookstore::domain::BookstoreService;
use crate::bookstore::domain::model::BookstoreEntity;
use crate::bookstore::dto::{BookstoreDto, BookstoreInput};
use crate::bookstore::repository::BookstoreRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const NOT_FOUND_MESSAGE: &str = "Bookstore not found";

pub(crate) struct BookstoreServiceImpl {
    bookstore_repository: Box<dyn BookstoreRepository>,
}

impl BookstoreServiceImpl {
    pub(crate) fn new(bookstore_repository: Box<dyn BookstoreRepository>) -> Self {
        Self {
            bookstore_repository,
        }
    }
}

fn not_found_as(err: LibraryError) -> LibraryError {
    if err.is_not_found() {
        LibraryError::not_found(NOT_FOUND_MESSAGE)
    } else {
        err
    }
}

#[async_trait]
impl BookstoreService for BookstoreServiceImpl {
    async fn find_all_bookstores(&self) -> LibraryResult<Vec<BookstoreDto>> {
        let res = self.bookstore_repository.find_all().await?;
        Ok(res.iter().map(BookstoreDto::from).collect())
    }

    async fn find_bookstore_by_id(&self, id: &str) -> LibraryResult<Option<BookstoreDto>> {
        match self.bookstore_repository.get(id).await {
            Ok(entity) => Ok(Some(BookstoreDto::from(&entity))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn add_bookstore(&self, body: &Value) -> LibraryResult<BookstoreDto> {
        let input = BookstoreInput::from_body(body)?;
        let entity = BookstoreEntity::new(input.author, input.title, input.pages);
        let _ = self.bookstore_repository.create(&entity).await?;
        info!(bookstore_id = %entity.id(), "bookstore added");
        Ok(BookstoreDto::from(&entity))
    }

    // Overwrites all three fields, a field missing from the body becomes absent.
    async fn update_bookstore(&self, id: &str, body: &Value) -> LibraryResult<BookstoreDto> {
        let mut entity = self.bookstore_repository.get(id).await.map_err(not_found_as)?;
        let input = BookstoreInput::from_body(body)?;
        entity.author = input.author;
        entity.title = input.title;
        entity.pages = input.pages;
        let _ = self.bookstore_repository.update(&entity).await.map_err(not_found_as)?;
        info!(bookstore_id = %entity.id(), "bookstore updated");
        Ok(BookstoreDto::from(&entity))
    }

    async fn remove_bookstore(&self, id: &str) -> LibraryResult<()> {
        let _ = self.bookstore_repository.delete(id).await.map_err(not_found_as)?;
        info!(bookstore_id = id, "bookstore deleted");
        Ok(())
    }
}

impl From<&BookstoreEntity> for BookstoreDto {
    fn from(other: &BookstoreEntity) -> Self {
        Self {
            bookstore_id: other.bookstore_id.to_string(),
            author: other.author.clone(),
            title: other.title.clone(),
            pages: other.pages,
        }
    }
}
