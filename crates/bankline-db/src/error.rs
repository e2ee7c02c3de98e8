//! Error types for the storage layer.
//!
//! All store operations report failures via [`DbError`]. The API layer
//! surfaces the [`Display`](core::fmt::Display) text verbatim, so messages
//! are written for clients as much as for logs.

use bankline_types::AccountId;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No account exists with the requested ID.
    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    /// The store has run out of identifiers to assign.
    #[error("account id space exhausted")]
    IdExhausted,

    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
