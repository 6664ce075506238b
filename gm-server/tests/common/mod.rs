#![allow(dead_code)]

//! Test infrastructure for gm-server API tests

use gm_auth::{TokenService, hash_password};
use gm_core::{User, UserStatus, UserType};
use gm_db::SqliteIdentityStore;
use gm_server::AppState;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-32-bytes!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = sqlx::sqlite::SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory databases live and die with their connection
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    gm_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_state() -> AppState {
    let pool = create_test_pool().await;
    let tokens = TokenService::new(TEST_JWT_SECRET, 900, 604_800);
    let identity = Arc::new(SqliteIdentityStore::new(pool.clone()));

    AppState::new(pool, tokens, identity)
}

/// Create a test business, returning its id
pub async fn create_test_business(pool: &SqlitePool, name: &str) -> i64 {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO businesses (name, status, created_at, updated_at) VALUES (?, 'ACTIVE', ?, ?)",
    )
    .bind(name)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test business")
    .last_insert_rowid()
}

/// Create a test user with a real bcrypt hash so login works end to end
pub async fn create_test_user(
    state: &AppState,
    username: &str,
    password: &str,
    user_type: UserType,
    business_id: Option<i64>,
) -> i64 {
    let store = SqliteIdentityStore::new(state.pool.clone());

    let mut user = User::new(username, hash_password(password).unwrap(), user_type);
    user.display_name = Some(format!("{} (test)", username));
    user.business_id = business_id.map(|id| gm_core::BusinessId::new(id).unwrap());

    store.create_user(&user).await.expect("Failed to create test user")
}

/// Create a disabled user
pub async fn create_suspended_user(state: &AppState, username: &str, password: &str) {
    let store = SqliteIdentityStore::new(state.pool.clone());

    let mut user = User::new(username, hash_password(password).unwrap(), UserType::Employee);
    user.status = UserStatus::Suspended;

    store
        .create_user(&user)
        .await
        .expect("Failed to create test user");
}

/// Issue an access token directly, bypassing the login endpoint
pub fn access_token_for(state: &AppState, username: &str) -> String {
    state.tokens.issue_access(username).unwrap()
}

/// Build a request with optional bearer token, business header and JSON body
pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    business_id: Option<i64>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    if let Some(business_id) = business_id {
        builder = builder.header("X-Business-Id", business_id.to_string());
    }

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request and decode the JSON body
pub async fn send(app: &Router, req: Request<Body>) -> (u16, serde_json::Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Log in through the API and return the response body
pub async fn login(app: &Router, username: &str, password: &str) -> (u16, serde_json::Value) {
    send(
        app,
        request(
            "POST",
            "/api/v1/auth/login",
            None,
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        ),
    )
    .await
}
