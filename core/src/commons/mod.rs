pub mod channel;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod identifier;
pub mod models;
pub mod self_signature_manager;
