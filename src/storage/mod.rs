use std::error::Error;
use std::fmt;

mod file;
mod memory;
mod sqlite;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Key the current round is persisted under.
pub const STORAGE_KEY: &str = "rusty-scorecard.round";

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::new(format!("io: {value}"))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(format!("sqlite: {value}"))
    }
}

/// String key/value store standing in for browser local storage.
///
/// Calls are synchronous and each one is treated as atomic.
pub trait Storage {
    /// # Errors
    ///
    /// Will return `Err` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Will return `Err` if the backend cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Will return `Err` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
