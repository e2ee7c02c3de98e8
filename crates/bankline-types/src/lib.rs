//! Shared type definitions for the Bankline JSON API.
//!
//! # Modules
//!
//! - [`ids`] -- Integer account identifier and its path parser
//! - [`account`] -- The [`Account`] entity and [`CreateAccountRequest`]

pub mod account;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use account::{Account, CreateAccountRequest};
pub use ids::{AccountId, ParseAccountIdError};
