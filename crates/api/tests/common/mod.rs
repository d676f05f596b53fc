//! Shared fixtures and HTTP helpers for the API integration tests.
//!
//! Tests drive the real router (same middleware stack as production) over
//! `tower::ServiceExt::oneshot` against a store in a temp directory.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use patisserie_api::auth::jwt::{generate_access_token, JwtConfig};
use patisserie_api::auth::password::hash_password;
use patisserie_api::config::ServerConfig;
use patisserie_api::router::build_app_router;
use patisserie_api::state::AppState;
use patisserie_core::identity::{Identity, ROLE_CHEF, ROLE_CUSTOMER};
use patisserie_core::model::cake::DEFAULT_IMAGE;
use patisserie_core::model::user::DEFAULT_AVATAR;
use patisserie_core::model::{Cake, User};
use patisserie_core::types::{new_id, now};
use patisserie_store::{JsonStore, StoreError};

/// A test application: the router plus handles to reach behind it.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<JsonStore>,
    pub jwt: JwtConfig,
    // Keeps the store directory alive for the duration of the test.
    _dir: tempfile::TempDir,
}

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config(data_file: std::path::PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_file,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
        chef_username: "jochef".to_string(),
        chef_password: None,
    }
}

/// Build the full application with a fresh store in a temp directory.
///
/// Mirrors the construction in `main.rs` so tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let config = test_config(dir.path().join("database.json"));
    let store = Arc::new(JsonStore::open(&config.data_file).expect("store should open"));

    let state = AppState {
        store: Arc::clone(&store),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    TestApp {
        app,
        store,
        jwt: config.jwt,
        _dir: dir,
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Create a user directly in the store and return it with a valid token.
pub async fn seed_user(ctx: &TestApp, username: &str, role: &str) -> (User, String) {
    let password_hash = hash_password("test_password_123!").expect("hashing should succeed");
    let user = User {
        id: new_id(),
        username: username.to_string(),
        password_hash,
        role: role.to_string(),
        avatar: DEFAULT_AVATAR.to_string(),
        created_at: now(),
    };

    let stored = user.clone();
    ctx.store
        .with_transaction(move |snapshot| {
            snapshot.users.push(stored);
            Ok::<_, StoreError>(())
        })
        .await
        .expect("seeding should succeed");

    let identity = Identity {
        id: user.id.clone(),
        display_name: user.username.clone(),
        role: user.role.clone(),
    };
    let token =
        generate_access_token(&identity, &ctx.jwt).expect("token generation should succeed");
    (user, token)
}

/// Create the chef account with a token.
pub async fn seed_chef(ctx: &TestApp) -> (User, String) {
    seed_user(ctx, "jochef", ROLE_CHEF).await
}

/// Create a customer account with a token.
pub async fn seed_customer(ctx: &TestApp, username: &str) -> (User, String) {
    seed_user(ctx, username, ROLE_CUSTOMER).await
}

/// Create a cake directly in the store.
pub async fn seed_cake(ctx: &TestApp, name: &str, price: u32) -> Cake {
    let cake = Cake {
        id: new_id(),
        name: name.to_string(),
        price,
        image: DEFAULT_IMAGE.to_string(),
        description: format!("{name} description"),
    };
    let stored = cake.clone();
    ctx.store
        .with_transaction(move |snapshot| {
            snapshot.cakes.push(stored);
            Ok::<_, StoreError>(())
        })
        .await
        .expect("seeding should succeed");
    cake
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Send a single request through a clone of the router.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
