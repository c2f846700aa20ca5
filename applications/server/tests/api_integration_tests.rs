/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use common::{create_test_app, save_request_body};
use sqlx::Row;
use tower::util::ServiceExt;

const EXTERNAL_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

async fn body_json(response: Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn post_save(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri("/save")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn person_count(pool: &sqlx::SqlitePool) -> i64 {
    sqlx::query("SELECT COUNT(*) AS count FROM persons")
        .fetch_one(pool)
        .await
        .unwrap()
        .get("count")
}

/// Saving a valid, never-before-seen external id echoes the input back
#[tokio::test]
async fn save_valid_person_returns_201() {
    let app = create_test_app().await;

    let body = save_request_body(EXTERNAL_ID);
    let response = app.router.clone().oneshot(post_save(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["external_id"], EXTERNAL_ID);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["date_of_birth"], "1990-01-15T00:00:00Z");

    // Internal fields never leak into the response
    assert!(json.get("id").is_none());
    assert!(json.get("created_at").is_none());
}

/// Saving the same external id twice conflicts and leaves one record
#[tokio::test]
async fn duplicate_external_id_returns_409() {
    let app = create_test_app().await;

    let body = save_request_body(EXTERNAL_ID);
    let first = app.router.clone().oneshot(post_save(&body)).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.router.clone().oneshot(post_save(&body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["error"], "Person with this external_id already exists");

    assert_eq!(person_count(&app.pool).await, 1);
}

#[tokio::test]
async fn invalid_email_returns_400() {
    let app = create_test_app().await;

    let mut body = save_request_body(EXTERNAL_ID);
    body["email"] = "invalid-email".into();

    let response = app.router.clone().oneshot(post_save(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Validation error:"));
}

#[tokio::test]
async fn missing_name_returns_400() {
    let app = create_test_app().await;

    let mut body = save_request_body(EXTERNAL_ID);
    body.as_object_mut().unwrap().remove("name");

    let response = app.router.clone().oneshot(post_save(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Validation error:"));
    assert_eq!(person_count(&app.pool).await, 0);
}

#[tokio::test]
async fn malformed_uuid_returns_400() {
    let app = create_test_app().await;

    let body = save_request_body("not-a-uuid");
    let response = app.router.clone().oneshot(post_save(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_returns_400_with_json_error_body() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/save")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid request:"));
}

/// A just-created person is retrievable by the id SQLite assigned it
#[tokio::test]
async fn get_created_person_returns_200() {
    let app = create_test_app().await;

    let body = save_request_body(EXTERNAL_ID);
    let created = app.router.clone().oneshot(post_save(&body)).await.unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    // First record in a fresh database gets id 1
    let response = app.router.clone().oneshot(get("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["external_id"], EXTERNAL_ID);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["date_of_birth"], "1990-01-15T00:00:00Z");
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = create_test_app().await;

    let response = app.router.clone().oneshot(get("/999999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Person not found");
}

#[tokio::test]
async fn get_non_numeric_id_returns_400() {
    let app = create_test_app().await;

    let response = app.router.clone().oneshot(get("/invalid-id")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid ID format");
}

#[tokio::test]
async fn get_non_positive_id_returns_400() {
    let app = create_test_app().await;

    for uri in ["/0", "/-1"] {
        let response = app.router.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {uri}");

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid ID format");
    }
}

#[tokio::test]
async fn health_returns_ok() {
    let app = create_test_app().await;

    let response = app.router.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"status": "ok"}));
}
