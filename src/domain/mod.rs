pub mod checklist;
pub mod client;
pub mod file_status;
pub mod payment;
pub mod service;
pub mod types;
