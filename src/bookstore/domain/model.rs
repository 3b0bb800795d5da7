use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const ID_ATTRIBUTE: &str = "_id";
pub(crate) const AUTHOR_ATTRIBUTE: &str = "Author";
pub(crate) const TITLE_ATTRIBUTE: &str = "Title";
pub(crate) const PAGES_ATTRIBUTE: &str = "Pages";

// Error bodies carry the error class ahead of the message.
pub(crate) const VALIDATION_FAILED: &str = "ValidationError: Bookstore validation failed";

// BookstoreEntity is the persisted bookstore document. Absent fields are left out of the
// stored document entirely rather than written as nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookstoreEntity {
    #[serde(rename = "_id")]
    pub bookstore_id: String,
    #[serde(rename = "Author", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Pages", default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,
}

impl BookstoreEntity {
    pub fn new(author: Option<String>, title: Option<String>, pages: Option<i64>) -> Self {
        Self {
            bookstore_id: Uuid::new_v4().to_string(),
            author,
            title,
            pages,
        }
    }

    // Required-field check applied by the store on insert. The empty string counts as present.
    pub fn validate(&self) -> LibraryResult<()> {
        let mut missing = vec![];
        if self.author.is_none() {
            missing.push(AUTHOR_ATTRIBUTE);
        }
        if self.title.is_none() {
            missing.push(TITLE_ATTRIBUTE);
        }
        if self.pages.is_none() {
            missing.push(PAGES_ATTRIBUTE);
        }
        if missing.is_empty() {
            return Ok(());
        }
        let reasons = missing.iter()
            .map(|path| format!("{}: Path `{}` is required.", path, path))
            .collect::<Vec<String>>()
            .join(", ");
        Err(LibraryError::validation(
            format!("{}: {}", VALIDATION_FAILED, reasons).as_str(), Some("required".to_string())))
    }
}

impl Identifiable for BookstoreEntity {
    fn id(&self) -> String {
        self.bookstore_id.to_string()
    }
}

// Identifiers are assigned by the store as UUIDs, anything else cannot address a record.
pub(crate) fn parse_bookstore_id(id: &str) -> LibraryResult<String> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| LibraryError::validation(
            format!("CastError: Cast to identifier failed for value {:?} (type string) at path \"_id\" for model \"Bookstore\"", id).as_str(),
            Some("cast".to_string())))
}
