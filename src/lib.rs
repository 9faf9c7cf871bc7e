//! Receiver for Adobe Sign agreement webhooks.
//!
//! Answers the webhook verification handshake, logs agreement lifecycle
//! events and stores signed documents attached to workflow-completed events.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;

pub use app_state::{build_app_state, build_app_state_with_store, AppState};
pub use config::{AppConfig, DocumentTarget};
pub use routes::create_app;
