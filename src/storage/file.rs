use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::storage::{KeyValueStore, StorageResult};

/// File-backed store keeping one `<key>.json` document per key under a base
/// directory.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> StorageResult<Option<Value>> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, document: &Value) -> StorageResult<()> {
        fs::create_dir_all(&self.root)?;
        let rendered = serde_json::to_string_pretty(document)?;
        fs::write(self.document_path(key), rendered)?;
        Ok(())
    }
}
