//! Client, process-checklist and file-status management for a Notaris/PPAT
//! office.
//!
//! The crate is the data core of the application: client intake and editing,
//! per-service process checklists instantiated from a read-only catalog,
//! payment tracking, file-retrieval status, and JSON backup/restore. The
//! collection is held in memory and mirrored whole to a key-value
//! persistence port on every mutation; there is no server and no concurrent
//! writer.
//!
//! Layering follows the usual split: `domain` holds entities and value
//! objects, `catalog` the read-only service/checklist lookup tables,
//! `repository` the client record store over the `storage` port, `forms`
//! validated input, and `services` the workflows that tie them together.

pub mod catalog;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;

/// Persistence key the client collection is stored under, shared with the
/// web client's local-storage documents.
pub const CLIENTS_STORAGE_KEY: &str = "notarisAppClients";
