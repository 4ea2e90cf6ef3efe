//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` directly against
//! the router, with no TCP listener, but through the same middleware stack
//! production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ladle_api::config::ServerConfig;
use ladle_api::router::build_app_router;
use ladle_api::state::AppState;
use ladle_store::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh, empty store.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a JSON POST request without an identity header.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a JSON POST request as the given authenticated user.
pub async fn post_json_as(
    app: Router,
    path: &str,
    user_id: i64,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .header("x-user-id", user_id.to_string())
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a bodyless PUT request as the given authenticated user.
pub async fn put_as(app: Router, path: &str, user_id: i64) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(path)
            .header("x-user-id", user_id.to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request as the given authenticated user.
pub async fn delete_as(app: Router, path: &str, user_id: i64) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(path)
            .header("x-user-id", user_id.to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid recipe creation body with the given title.
pub fn recipe_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A test recipe",
        "cuisine": "Italian",
        "diet": "Regular",
        "difficulty": "Easy",
        "ingredients": [{"name": "Tomato", "amount": "2"}],
        "instructions": [{"step": 1, "description": "Chop"}],
        "prep_time": 10,
        "cook_time": 20,
        "servings": 2,
        "calories": 400
    })
}

/// Create a user through the API and return their id.
pub async fn seed_user(app: &Router, username: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/users",
        serde_json::json!({ "username": username }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Create a recipe through the API and return its id.
pub async fn seed_recipe(app: &Router, author_id: i64, title: &str) -> i64 {
    let response = post_json_as(app.clone(), "/api/v1/recipes", author_id, recipe_body(title)).await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
