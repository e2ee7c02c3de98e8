//! Storage layer for the Bankline JSON API.
//!
//! The API depends only on the [`AccountStore`] trait. Two implementations
//! ship with the crate:
//!
//! ```text
//! Handlers
//!     |
//!     +-- AccountStore (trait)
//!         |-- MemoryStore     (BTreeMap behind a tokio RwLock)
//!         +-- PostgresStore   (sqlx PgPool, embedded migrations)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- The [`AccountStore`] contract
//! - [`memory`] -- In-memory implementation
//! - [`postgres`] -- `PostgreSQL` implementation and pool configuration
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use memory::MemoryStore;
pub use postgres::{AccountRow, PostgresConfig, PostgresStore};
pub use store::AccountStore;
