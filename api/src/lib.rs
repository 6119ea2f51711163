//! # standeal-api
//!
//! HTTP surface, configuration, and notification dispatch for the Standeal
//! transport-services backend. The binary in `main.rs` wires everything
//! together; the library exposes the router and state so tests can drive the
//! service in-process.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use dispatcher::{Notification, NotificationDispatcher};
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
