use std::sync::Arc;
use crate::bookstore::domain::BookstoreService;
use crate::bookstore::domain::model::ID_ATTRIBUTE;
use crate::bookstore::domain::service::BookstoreServiceImpl;
use crate::bookstore::repository::BookstoreRepository;
use crate::bookstore::repository::ddb_bookstore_repository::DDBBookstoreRepository;
use crate::bookstore::repository::memory_bookstore_repository::MemoryBookstoreRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, ensure_table};

// Builds the repository for the configured store, probing DynamoDB so that an unreachable
// store fails here instead of on the first request.
pub(crate) async fn create_bookstore_repository(config: &Configuration) -> LibraryResult<Box<dyn BookstoreRepository>> {
    match config.store {
        RepositoryStore::DynamoDB | RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            ensure_table(&client, config.store, config.table_name.as_str(), ID_ATTRIBUTE).await?;
            Ok(Box::new(DDBBookstoreRepository::new(client, config.table_name.as_str())))
        }
        RepositoryStore::Memory => {
            Ok(Box::new(MemoryBookstoreRepository::new()))
        }
    }
}

pub(crate) async fn create_bookstore_service(config: &Configuration) -> LibraryResult<Arc<dyn BookstoreService>> {
    let bookstore_repo = create_bookstore_repository(config).await?;
    Ok(Arc::new(BookstoreServiceImpl::new(bookstore_repo)))
}
