//! The key-value persistence port.
//!
//! String keys mapped to JSON documents, written whole on every save, the
//! shape browser local storage gives the web client.
use serde_json::Value;
use thiserror::Error;

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value store of JSON documents.
pub trait KeyValueStore {
    /// Loads the document stored under `key`, `None` when absent.
    fn load(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Stores `document` under `key`, replacing any previous value.
    fn save(&self, key: &str, document: &Value) -> StorageResult<()>;
}
