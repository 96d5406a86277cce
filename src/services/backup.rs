//! Export and restore of the JSON backup document.

use crate::models::backup::BackupDocument;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Builds a backup document from the current collection, newest first.
pub fn export_backup<R>(repo: &R) -> ServiceResult<BackupDocument>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list(ClientListQuery::new())?;
    Ok(BackupDocument::new(clients))
}

/// Restores a backup from its raw JSON text.
///
/// The whole document is parsed before anything is applied: a malformed
/// document reports [`ServiceError::Import`] and leaves the store untouched.
/// On success the client collection is replaced wholesale. Returns the number
/// of restored clients.
pub fn import_backup<R>(repo: &R, raw: &str) -> ServiceResult<usize>
where
    R: ClientWriter + ?Sized,
{
    let document: BackupDocument = serde_json::from_str(raw).map_err(|err| {
        log::error!("Failed to parse backup document: {err}");
        ServiceError::Import(err.to_string())
    })?;

    repo.replace_all(&document.clients).map_err(|err| {
        log::error!("Failed to restore backup: {err}");
        ServiceError::from(err)
    })?;
    Ok(document.clients.len())
}
