pub mod model;
pub mod service;

use async_trait::async_trait;
use serde_json::Value;
use crate::bookstore::dto::BookstoreDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait BookstoreService: Sync + Send {
    async fn find_all_bookstores(&self) -> LibraryResult<Vec<BookstoreDto>>;
    // Ok(None) when no record has the identifier
    async fn find_bookstore_by_id(&self, id: &str) -> LibraryResult<Option<BookstoreDto>>;
    // the body is cast into a record, a body that is not an object has none of the fields
    async fn add_bookstore(&self, body: &Value) -> LibraryResult<BookstoreDto>;
    // the record is looked up before the body is cast, so an unknown id wins over a bad body
    async fn update_bookstore(&self, id: &str, body: &Value) -> LibraryResult<BookstoreDto>;
    async fn remove_bookstore(&self, id: &str) -> LibraryResult<()>;
}
