//! JSON HTTP API over a single account resource.
//!
//! This crate provides an Axum HTTP server that exposes create, read, and
//! delete operations on accounts stored behind the
//! [`AccountStore`](bankline_db::AccountStore) trait.
//!
//! # Architecture
//!
//! ```text
//! request --> router --> handler (method + id validation)
//!                           |
//!                           +--> AccountStore call
//!                           |
//!                 Ok  --> write_json(200, value)
//!                 Err --> ApiError --> 400 {"Error": msg}
//! ```
//!
//! Every failure, whatever its kind, is reported with the same status
//! code. See [`error::ERROR_STATUS`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorBody};
pub use router::build_router;
pub use server::{ApiServer, ServerError};
pub use state::AppState;
