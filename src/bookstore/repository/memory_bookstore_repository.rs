use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::bookstore::domain::model::{parse_bookstore_id, BookstoreEntity};
use crate::bookstore::repository::BookstoreRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Process-local store used for development and tests, records are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryBookstoreRepository {
    records: RwLock<Vec<BookstoreEntity>>,
}

impl MemoryBookstoreRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookstoreEntity> for MemoryBookstoreRepository {
    async fn create(&self, entity: &BookstoreEntity) -> LibraryResult<usize> {
        entity.validate()?;
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("bookstore already exists for {}", entity.id()).as_str()));
        }
        records.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookstoreEntity) -> LibraryResult<usize> {
        let id = parse_bookstore_id(entity.bookstore_id.as_str())?;
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                *record = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("bookstore not found for {}", id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookstoreEntity> {
        let id = parse_bookstore_id(id)?;
        self.records.read().await.iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("bookstore not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let id = parse_bookstore_id(id)?;
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id() == id) {
            Some(ndx) => {
                records.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("bookstore not found for {}", id).as_str())),
        }
    }
}

#[async_trait]
impl BookstoreRepository for MemoryBookstoreRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookstoreEntity>> {
        Ok(self.records.read().await.clone())
    }
}
