use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use crate::bookstore::domain::model::{AUTHOR_ATTRIBUTE, PAGES_ATTRIBUTE, TITLE_ATTRIBUTE, VALIDATION_FAILED};
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::cast::{lenient_int, lenient_string};

// BookstoreDto is the record as returned to clients, keyed by the wire names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookstoreDto {
    #[serde(rename = "_id")]
    pub bookstore_id: String,
    #[serde(rename = "Author", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Pages", default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,
}

// BookstoreInput carries the three fields of an add or update request body.
// Unknown keys are ignored and a missing key is None.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct BookstoreInput {
    #[serde(rename = "Author", default, deserialize_with = "cast_author")]
    pub author: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "cast_title")]
    pub title: Option<String>,
    #[serde(rename = "Pages", default, deserialize_with = "cast_pages")]
    pub pages: Option<i64>,
}

impl BookstoreInput {
    // Only an object carries fields, any other body reads as one with none of them.
    pub fn from_body(body: &Value) -> LibraryResult<Self> {
        let fields = match body {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        serde_json::from_value(Value::Object(fields)).map_err(|err| LibraryError::validation(
            format!("{}: {}", VALIDATION_FAILED, err).as_str(), Some("cast".to_string())))
    }
}

fn cast_author<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    lenient_string::deserialize(deserializer, AUTHOR_ATTRIBUTE)
}

fn cast_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    lenient_string::deserialize(deserializer, TITLE_ATTRIBUTE)
}

fn cast_pages<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    lenient_int::deserialize(deserializer, PAGES_ATTRIBUTE)
}
