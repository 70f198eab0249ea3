//! Router tests that do not need a running database

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use catalog_server::{api, repository::Repository, AppConfig, AppState};

fn app() -> Router {
    let config = AppConfig::default();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool");
    api::create_router(AppState::new(config, Repository::new(pool)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_page_zero_is_rejected() {
    let (status, body) = send(get("/api/v1/books?page=0")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "InvalidPage");

    let (status, _) = send(get("/api/v1/authors?page=0")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_page_is_invalid_page() {
    for uri in ["/api/v1/books?page=abc", "/api/v1/authors?page=-1", "/api/v1/books?page="] {
        let (status, body) = send(get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"], "InvalidPage", "{}", uri);
        assert_eq!(body["code"], 6, "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_loan_status_filter() {
    let (status, _) = send(get("/api/v1/instances?status=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_genre_requires_name() {
    let (status, body) = send(post_json("/api/v1/genres", json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_create_author_checks_lifespan() {
    let (status, _) = send(post_json(
        "/api/v1/authors",
        json!({
            "first_name": "Jules",
            "last_name": "Verne",
            "date_of_birth": "1905-03-24",
            "date_of_death": "1828-02-08"
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_book_rejects_long_isbn() {
    let (status, _) = send(post_json(
        "/api/v1/books",
        json!({ "title": "Emma", "isbn": "97801403672189" }),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_instance_id_must_be_uuid() {
    let (status, _) = send(get("/api/v1/instances/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books/{id}"].is_object());
}
