//! Axum router construction for the account API.
//!
//! Both routes use [`any`] so that method selection happens in the
//! handlers, where unsupported methods become the same JSON error as
//! every other failure.

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use bankline_db::AccountStore;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the account API.
///
/// The router includes:
/// - `/account` -- list (`GET`) and create (`POST`)
/// - `/account/{id}` -- fetch (`GET`) and delete (`DELETE`)
pub fn build_router<S: AccountStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/account", any(handlers::handle_account::<S>))
        .route("/account/{id}", any(handlers::handle_account_by_id::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
