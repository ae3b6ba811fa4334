//! DineIn Client - login gate for the restaurant app
//!
//! The only network call the app makes is the login request. Everything
//! after login runs in-process against `dinein-core`.

pub mod config;
pub mod error;
pub mod gate;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gate::LoginGate;
pub use http::{AuthClient, NetworkAuthClient, OfflineAuthClient};

// Re-export shared types for convenience
pub use shared::models::{LoginRequest, LoginResponse};
