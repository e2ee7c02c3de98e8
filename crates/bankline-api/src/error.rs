//! Error types for the account API and the single error-to-response policy.
//!
//! Every handler returns `Result<Response, ApiError>`. Axum turns the
//! `Err` side into a response through the [`IntoResponse`] impl below,
//! which is the only place a failure becomes HTTP. The policy is uniform:
//! whatever went wrong, the client gets [`ERROR_STATUS`] and a body of the
//! form `{"Error": "<message>"}`.

use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use bankline_db::DbError;
use bankline_types::ParseAccountIdError;

use crate::handlers::write_json;

/// Status code used for every failed request.
///
/// Not-found and method-not-allowed failures deliberately share this code
/// with validation and storage failures.
pub const ERROR_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Errors that can occur while serving an account request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `{id}` path segment is not a non-negative integer.
    #[error(transparent)]
    InvalidId(#[from] ParseAccountIdError),

    /// The request body could not be read.
    #[error("invalid request body: {0}")]
    Body(#[from] BytesRejection),

    /// The request body is not a valid create-account object.
    #[error("invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The method is not supported on the matched path.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(Method),

    /// The store rejected the operation. The message is passed through
    /// verbatim.
    #[error(transparent)]
    Storage(#[from] DbError),
}

/// JSON body written for every failed request.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::warn!(error = %message, "Request failed");
        write_json(ERROR_STATUS, &ErrorBody { error: message })
    }
}
