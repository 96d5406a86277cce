pub mod client;
pub mod notification;
