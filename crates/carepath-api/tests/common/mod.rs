#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use carepath_api::middleware::auth::{ClaimPolicy, TokenVerifier};
use carepath_api::state::AppState;
use carepath_storage::memory::MemoryStore;

pub const SECRET: &[u8] = b"test-signing-secret";

pub fn test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        verifier: Some(Arc::new(TokenVerifier::hs256(SECRET, &ClaimPolicy::default()))),
    };
    (state, store)
}

pub fn app() -> Router {
    carepath_api::router(test_state().0)
}

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    exp: i64,
}

pub fn token_for(handle: &str) -> String {
    let claims = Claims {
        sub: handle,
        exp: jiff::Timestamp::now().as_second() + 3600,
    };
    signed(&claims)
}

/// Sign arbitrary claims with the test secret.
pub fn signed<T: Serialize>(claims: &T) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

pub fn request(method: &str, path: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn post_json(path: &str, body: Value, token: Option<&str>) -> Request<Body> {
    request("POST", path, Some(body), token)
}

pub fn put_json(path: &str, body: Value, token: Option<&str>) -> Request<Body> {
    request("PUT", path, Some(body), token)
}

pub fn get(path: &str, token: Option<&str>) -> Request<Body> {
    request("GET", path, None, token)
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub fn turns(len: usize) -> Value {
    Value::Array(
        (0..len)
            .map(|i| {
                serde_json::json!({
                    "role": if i % 2 == 0 { "user" } else { "bot" },
                    "message": format!("turn {i}"),
                    "timestamp": "2026-03-01T09:30:00Z",
                })
            })
            .collect(),
    )
}
