use thiserror::Error;
use crate::core::library::LibraryError;
use crate::core::repository::RepositoryStore;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_PATH: &str = "/api/bookstore";
pub const DEFAULT_TABLE_NAME: &str = "bookstores";
pub const DEFAULT_DYNAMODB_ENDPOINT: &str = "http://localhost:8000";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the bookstore service, fixed at startup
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub port: u16,
    pub base_path: String,
    pub table_name: String,
    pub store: RepositoryStore,
    pub dynamodb_endpoint: String,
}

impl Configuration {
    pub fn new(store: RepositoryStore) -> Self {
        Configuration {
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            store,
            dynamodb_endpoint: DEFAULT_DYNAMODB_ENDPOINT.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
        where F: Fn(&str) -> Option<String> {
        let store = match lookup("BOOKSTORE_STORE") {
            Some(val) => val.parse::<RepositoryStore>().map_err(StartupError::InvalidConfig)?,
            None => RepositoryStore::LocalDynamoDB,
        };
        let mut config = Configuration::new(store);

        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err|
                StartupError::InvalidConfig(format!("PORT {:?} is not a valid port: {}", port, err)))?;
        }
        if let Some(base_path) = lookup("BOOKSTORE_BASE_PATH") {
            if !base_path.starts_with('/') {
                return Err(StartupError::InvalidConfig(
                    format!("BOOKSTORE_BASE_PATH {:?} must start with '/'", base_path)));
            }
            config.base_path = base_path;
        }
        if let Some(table_name) = lookup("BOOKSTORE_TABLE") {
            if table_name.trim().is_empty() {
                return Err(StartupError::InvalidConfig("BOOKSTORE_TABLE must not be empty".to_string()));
            }
            config.table_name = table_name;
        }
        if let Some(endpoint) = lookup("DYNAMODB_ENDPOINT") {
            config.dynamodb_endpoint = endpoint;
        }
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("error connecting to bookstore store: {0}")]
    Store(#[from] LibraryError),
    #[error("server error: {0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, StartupError};
    use crate::core::repository::RepositoryStore;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_should_build_default_config() {
        let config = Configuration::from_lookup(lookup(&[])).expect("should build config");
        assert_eq!(3000, config.port);
        assert_eq!("/api/bookstore", config.base_path.as_str());
        assert_eq!("bookstores", config.table_name.as_str());
        assert_eq!(RepositoryStore::LocalDynamoDB, config.store);
        assert_eq!("http://localhost:8000", config.dynamodb_endpoint.as_str());
    }

    #[tokio::test]
    async fn test_should_override_config_from_env() {
        let config = Configuration::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("BOOKSTORE_STORE", "memory"),
            ("BOOKSTORE_BASE_PATH", "/books"),
            ("BOOKSTORE_TABLE", "books_test"),
        ])).expect("should build config");
        assert_eq!(8080, config.port);
        assert_eq!(RepositoryStore::Memory, config.store);
        assert_eq!("/books", config.base_path.as_str());
        assert_eq!("books_test", config.table_name.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_config() {
        assert!(matches!(Configuration::from_lookup(lookup(&[("PORT", "http")])),
            Err(StartupError::InvalidConfig(_))));
        assert!(matches!(Configuration::from_lookup(lookup(&[("BOOKSTORE_STORE", "mongo")])),
            Err(StartupError::InvalidConfig(_))));
        assert!(matches!(Configuration::from_lookup(lookup(&[("BOOKSTORE_BASE_PATH", "api")])),
            Err(StartupError::InvalidConfig(_))));
    }
}
