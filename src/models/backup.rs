//! The JSON backup document exchanged with the export/import feature.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::client::Client;

/// Top-level backup document, shaped `{ "clients": [...], ... }`.
///
/// Only the client collection is interpreted here; other sections written by
/// the full application (office info, staff accounts, notification prefs)
/// are carried opaquely so a full backup round-trips through export/import.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BackupDocument {
    pub clients: Vec<Client>,
    #[serde(flatten)]
    pub extra_sections: Map<String, Value>,
}

impl BackupDocument {
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            clients,
            extra_sections: Map::new(),
        }
    }
}
