#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bolaquent::config::Config;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        session_secret: TEST_SECRET.to_string(),
        ..Config::default()
    }
}

pub async fn create_test_app() -> Router {
    create_test_app_with(test_config()).await
}

pub async fn create_test_app_with(config: Config) -> Router {
    bolaquent::create_app(config)
        .await
        .expect("test app should start against in-memory sqlite")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Logs in (creating the learner if needed) and returns the bearer token.
pub async fn login(app: &Router, username: &str, age: i64) -> String {
    let response = send(
        app,
        post_json(
            "/api/auth/login",
            None,
            serde_json::json!({ "username": username, "age": age }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    token_from(response).await
}

pub async fn demo(app: &Router, tier: Option<i64>) -> String {
    let uri = match tier {
        Some(tier) => format!("/api/auth/demo?tier={tier}"),
        None => "/api/auth/demo".to_string(),
    };
    let response = send(app, get(&uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    token_from(response).await
}

async fn token_from(response: Response<Body>) -> String {
    let json = body_json(response).await;
    json["data"]["token"]
        .as_str()
        .expect("token in session response")
        .to_string()
}
