//! Request dispatch for the account endpoints.
//!
//! Both routes are registered method-agnostically; the handlers here pick
//! the operation from the HTTP method and fail with
//! [`ApiError::MethodNotAllowed`] for anything else. Handlers never touch
//! storage beyond a single [`AccountStore`] call.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/account` | List all accounts |
//! | `POST` | `/account` | Create an account |
//! | `GET` | `/account/{id}` | Get a single account |
//! | `DELETE` | `/account/{id}` | Delete a single account |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use bankline_db::AccountStore;
use bankline_types::{Account, AccountId, CreateAccountRequest, ParseAccountIdError};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Serialize `value` as the JSON response body with the given status.
///
/// The response carries `Content-Type: application/json`.
pub fn write_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    (status, Json(value)).into_response()
}

// ---------------------------------------------------------------------------
// /account
// ---------------------------------------------------------------------------

/// Dispatch a request on `/account`.
///
/// `GET` lists accounts, `POST` creates one. The body is only consulted
/// for `POST`.
pub async fn handle_account<S: AccountStore>(
    State(state): State<Arc<AppState<S>>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    match method {
        Method::GET => get_accounts(&state).await,
        Method::POST => create_account(&state, &body?).await,
        other => Err(ApiError::MethodNotAllowed(other)),
    }
}

async fn get_accounts<S: AccountStore>(state: &AppState<S>) -> Result<Response, ApiError> {
    let accounts = state.store.get_accounts().await?;
    Ok(write_json(StatusCode::OK, &accounts))
}

async fn create_account<S: AccountStore>(
    state: &AppState<S>,
    body: &[u8],
) -> Result<Response, ApiError> {
    let request: CreateAccountRequest = serde_json::from_slice(body)?;

    let mut account = Account::from(request);
    state.store.create_account(&mut account).await?;

    tracing::info!(id = %account.id, number = account.number, "Account created");
    Ok(write_json(StatusCode::OK, &account))
}

// ---------------------------------------------------------------------------
// /account/{id}
// ---------------------------------------------------------------------------

/// Dispatch a request on `/account/{id}`.
///
/// The identifier is validated before the method, so an unparseable id
/// is reported even when the method is also unsupported. A segment that
/// does not percent-decode to UTF-8 is reported as written in the URI.
pub async fn handle_account_by_id<S: AccountStore>(
    State(state): State<Arc<AppState<S>>>,
    method: Method,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let raw_id = match path {
        Ok(Path(raw_id)) => raw_id,
        Err(_undecodable) => return Err(ParseAccountIdError(last_segment(&uri)).into()),
    };
    let id: AccountId = raw_id.parse()?;

    match method {
        Method::GET => get_account(&state, id).await,
        Method::DELETE => delete_account(&state, id).await,
        other => Err(ApiError::MethodNotAllowed(other)),
    }
}

/// The final path segment exactly as it appears in the request URI.
fn last_segment(uri: &Uri) -> String {
    uri.path().rsplit('/').next().unwrap_or_default().to_owned()
}

async fn get_account<S: AccountStore>(
    state: &AppState<S>,
    id: AccountId,
) -> Result<Response, ApiError> {
    let account = state.store.get_account_by_id(id).await?;
    Ok(write_json(StatusCode::OK, &account))
}

async fn delete_account<S: AccountStore>(
    state: &AppState<S>,
    id: AccountId,
) -> Result<Response, ApiError> {
    state.store.delete_account(id).await?;

    tracing::info!(%id, "Account deleted");
    Ok(write_json(StatusCode::OK, &format!("account {id} deleted")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::header::CONTENT_TYPE;
    use bankline_db::MemoryStore;

    use super::*;

    fn state() -> Arc<AppState<MemoryStore>> {
        Arc::new(AppState::new(MemoryStore::new()))
    }

    #[test]
    fn last_segment_keeps_percent_encoding() {
        assert_eq!(last_segment(&Uri::from_static("/account/%FF")), "%FF");
        assert_eq!(last_segment(&Uri::from_static("/account/7?x=1")), "7");
    }

    #[test]
    fn write_json_sets_content_type() {
        let response = write_json(StatusCode::OK, &"hello");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn put_on_collection_is_rejected() {
        let result = handle_account(State(state()), Method::PUT, Ok(Bytes::new())).await;
        assert!(matches!(result, Err(ApiError::MethodNotAllowed(Method::PUT))));
    }

    #[tokio::test]
    async fn post_with_empty_body_is_decode_error() {
        let result = handle_account(State(state()), Method::POST, Ok(Bytes::new())).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn get_ignores_body() {
        let result = handle_account(
            State(state()),
            Method::GET,
            Ok(Bytes::from_static(b"not json")),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn id_is_validated_before_method() {
        let result = handle_account_by_id(
            State(state()),
            Method::PATCH,
            Uri::from_static("/account/abc"),
            Ok(Path(String::from("abc"))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidId(_))));
    }

    #[tokio::test]
    async fn patch_with_valid_id_is_rejected() {
        let result = handle_account_by_id(
            State(state()),
            Method::PATCH,
            Uri::from_static("/account/1"),
            Ok(Path(String::from("1"))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::MethodNotAllowed(Method::PATCH))));
    }

    #[tokio::test]
    async fn delete_missing_account_is_storage_error() {
        let result = handle_account_by_id(
            State(state()),
            Method::DELETE,
            Uri::from_static("/account/42"),
            Ok(Path(String::from("42"))),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Storage(_))));
    }
}
