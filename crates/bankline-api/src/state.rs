//! Shared application state for the account API.
//!
//! [`AppState`] owns the store the handlers delegate to. It is built once
//! at startup, wrapped in [`Arc`](std::sync::Arc), and injected via Axum's
//! `State` extractor. The store is responsible for its own
//! synchronization; the API layer adds no locks.

use bankline_db::AccountStore;

/// Shared state for the Axum application, generic over the store.
#[derive(Debug)]
pub struct AppState<S> {
    /// The account store every operation delegates to.
    pub store: S,
}

impl<S: AccountStore> AppState<S> {
    /// Create application state around a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }
}
