//! Infrastructure Services
//!
//! - **client**: REST client for registration and login, behind mockable traits
//! - **config**: The injected application configuration
//! - **errors**: Configuration and storage error types
//! - **storage**: Local storage for the auth flag and remembered login
//!
//! The services are WASM-first, using browser APIs and async traits without
//! Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
pub mod storage;
