pub mod client;
pub mod process;
