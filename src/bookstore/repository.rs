pub mod ddb_bookstore_repository;
pub mod memory_bookstore_repository;

use async_trait::async_trait;
use crate::bookstore::domain::model::BookstoreEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookstoreRepository: Repository<BookstoreEntity> {
    // every stored bookstore, unfiltered and unsorted
    async fn find_all(&self) -> LibraryResult<Vec<BookstoreEntity>>;
}
