//! Integration tests for the account API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, against a fresh in-memory store per test.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use bankline_api::{AppState, build_router};
use bankline_db::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_router() -> Router {
    build_router(Arc::new(AppState::new(MemoryStore::new())))
}

async fn send(router: &Router, method: Method, uri: &str, body: Body) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_to_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_json_content_type(response: &Response) {
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "application/json");
}

async fn create(router: &Router, first: &str, last: &str) -> Value {
    let body = json!({ "FirstName": first, "LastName": last }).to_string();
    let response = send(router, Method::POST, "/account", Body::from(body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response).await
}

// =========================================================================
// Create / read
// =========================================================================

#[tokio::test]
async fn test_create_account_returns_new_account() {
    let router = make_router();

    let body = r#"{"FirstName":"Anthony","LastName":"GG"}"#;
    let response = send(&router, Method::POST, "/account", Body::from(body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    let json = body_to_json(response).await;
    assert_eq!(json["FirstName"], "Anthony");
    assert_eq!(json["LastName"], "GG");
    assert_eq!(json["Balance"], 0);
    assert!(json["ID"].is_i64());
    assert_ne!(json["Number"], 0);
    assert!(json["CreatedAt"].is_string());
}

#[tokio::test]
async fn test_create_then_get_returns_identical_account() {
    let router = make_router();
    let created = create(&router, "Anthony", "GG").await;

    let path = format!("/account/{}", created["ID"]);
    let response = send(&router, Method::GET, &path, Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    let fetched = body_to_json(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_returns_every_created_account() {
    let router = make_router();

    let mut created = Vec::new();
    for (first, last) in [("Ada", "Lovelace"), ("Alan", "Turing"), ("Grace", "Hopper")] {
        created.push(create(&router, first, last).await);
    }

    let response = send(&router, Method::GET, "/account", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);

    let json = body_to_json(response).await;
    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), created.len());
    for account in &created {
        assert!(listed.contains(account));
    }
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_array() {
    let router = make_router();
    let response = send(&router, Method::GET, "/account", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response).await, json!([]));
}

// =========================================================================
// Delete
// =========================================================================

#[tokio::test]
async fn test_delete_account_returns_message() {
    let router = make_router();
    let created = create(&router, "Anthony", "GG").await;
    let id = created["ID"].as_i64().unwrap();

    let path = format!("/account/{id}");
    let response = send(&router, Method::DELETE, &path, Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    assert_eq!(
        body_to_json(response).await,
        json!(format!("account {id} deleted"))
    );

    let response = send(&router, Method::GET, &path, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_twice_fails() {
    let router = make_router();
    let created = create(&router, "Anthony", "GG").await;
    let path = format!("/account/{}", created["ID"]);

    let first = send(&router, Method::DELETE, &path, Body::empty()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = send(&router, Method::DELETE, &path, Body::empty()).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(second).await;
    assert!(json["Error"].as_str().unwrap().contains("not found"));
}

// =========================================================================
// Error policy
// =========================================================================

#[tokio::test]
async fn test_get_non_numeric_id_returns_error() {
    let router = make_router();
    let response = send(&router, Method::GET, "/account/notanumber", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    assert_eq!(
        body_to_json(response).await,
        json!({ "Error": "invalid id notanumber" })
    );
}

#[tokio::test]
async fn test_delete_non_numeric_id_returns_error() {
    let router = make_router();
    let response = send(&router, Method::DELETE, "/account/abc", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response).await;
    assert!(json["Error"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_undecodable_id_is_echoed_as_written() {
    let router = make_router();

    for method in [Method::GET, Method::DELETE] {
        let response = send(&router, method.clone(), "/account/%FF", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
        assert_json_content_type(&response);
        assert_eq!(
            body_to_json(response).await,
            json!({ "Error": "invalid id %FF" }),
            "{method}"
        );
    }

    // Decodable escapes are reported after decoding.
    let response = send(&router, Method::GET, "/account/%61bc", Body::empty()).await;
    assert_eq!(
        body_to_json(response).await,
        json!({ "Error": "invalid id abc" })
    );
}

#[tokio::test]
async fn test_negative_id_is_invalid() {
    let router = make_router();
    let response = send(&router, Method::GET, "/account/-1", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_to_json(response).await,
        json!({ "Error": "invalid id -1" })
    );
}

#[tokio::test]
async fn test_get_missing_account_is_bad_request() {
    let router = make_router();
    let response = send(&router, Method::GET, "/account/999", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_to_json(response).await,
        json!({ "Error": "account 999 not found" })
    );
}

#[tokio::test]
async fn test_unsupported_methods_are_bad_request() {
    let router = make_router();

    for (method, uri) in [
        (Method::PUT, "/account"),
        (Method::DELETE, "/account"),
        (Method::PATCH, "/account/1"),
        (Method::POST, "/account/1"),
        (Method::PUT, "/account/1"),
    ] {
        let response = send(&router, method.clone(), uri, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_json_content_type(&response);
        let json = body_to_json(response).await;
        assert_eq!(
            json["Error"],
            format!("method not allowed: {method}"),
            "{method} {uri}"
        );
    }
}

#[tokio::test]
async fn test_create_with_malformed_body_is_bad_request() {
    let router = make_router();

    for body in ["", "not json", "[]", r#"{"FirstName":"Anthony"}"#, r#"{"FirstName":1,"LastName":"GG"}"#] {
        let response = send(&router, Method::POST, "/account", Body::from(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        let json = body_to_json(response).await;
        assert!(
            json["Error"].as_str().unwrap().starts_with("invalid request body"),
            "body {body:?}"
        );
    }

    // Nothing was stored by the failed requests.
    let response = send(&router, Method::GET, "/account", Body::empty()).await;
    assert_eq!(body_to_json(response).await, json!([]));
}
