//! Account API server lifecycle management.
//!
//! [`ApiServer`] owns the listen address and the shared state, builds the
//! router, and serves until the process is terminated. There is no
//! graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use bankline_db::AccountStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// The account API server: one listen address, one store.
pub struct ApiServer<S> {
    listen_addr: SocketAddr,
    state: Arc<AppState<S>>,
}

impl<S: AccountStore> ApiServer<S> {
    /// Create a server that will serve `store` on `listen_addr`.
    pub fn new(listen_addr: SocketAddr, store: S) -> Self {
        Self {
            listen_addr,
            state: Arc::new(AppState::new(store)),
        }
    }

    /// The configured listen address.
    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Build the router over this server's state.
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state))
    }

    /// Bind the configured address and serve requests.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound, or
    /// [`ServerError::Serve`] on a fatal I/O error while serving.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.listen_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

        self.serve(listener).await
    }

    /// Serve requests on an already-bound listener.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Serve`] on a fatal I/O error while serving.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Bind(format!("listener has no local address: {e}")))?;

        info!(%addr, "JSON API server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(serve_failed)?;

        Ok(())
    }
}

fn serve_failed(e: std::io::Error) -> ServerError {
    ServerError::Serve(e.to_string())
}
