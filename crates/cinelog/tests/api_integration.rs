use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // for oneshot

use cinelog::config::Config;
use cinelog::router::create_router;
use cinelog::state::AppState;

fn test_app() -> Router {
    let config = Config {
        port: 4000,
        env: "testing".to_string(),
    };
    create_router(Arc::new(AppState::new(config)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

async fn post_movies(app: Router, body: impl Into<Body>) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/movies")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

fn error_message(body: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    value["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn healthcheck_reports_environment_and_version() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/healthcheck")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["status"], "available");
    assert_eq!(value["environment"], "testing");
    assert_eq!(value["version"], "1.0.0");
}

#[tokio::test]
async fn create_movie_echoes_parsed_input() {
    let body = json!({
        "title": "Moana",
        "year": 2016,
        "runtime": "107 mins",
        "genres": ["animation", "adventure"]
    });
    let (status, body) = post_movies(test_app(), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Moana"));
    assert!(body.contains("107"));
    assert!(body.contains("animation"));
}

#[tokio::test]
async fn create_movie_rejects_empty_body() {
    let (status, body) = post_movies(test_app(), Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "body must not be empty");
}

#[tokio::test]
async fn create_movie_rejects_malformed_syntax() {
    let (status, body) = post_movies(test_app(), r#"{"title": Moana}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("body contains badly-formed JSON (at line 1"));
}

#[tokio::test]
async fn create_movie_rejects_truncated_body() {
    let (status, body) = post_movies(test_app(), r#"{"title": "Moana""#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "body contains badly-formed JSON");
}

#[tokio::test]
async fn create_movie_rejects_wrong_field_type() {
    let (status, body) = post_movies(test_app(), r#"{"title": 123}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("body contains incorrect JSON type"));
}

#[tokio::test]
async fn create_movie_rejects_unknown_keys() {
    let (status, body) = post_movies(test_app(), r#"{"title": "Moana", "rating": "PG"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), r#"body contains unknown key "rating""#);
}

#[tokio::test]
async fn create_movie_rejects_multiple_json_values() {
    let (status, body) =
        post_movies(test_app(), r#"{"title": "Moana"}{"title": "Top Gun"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "body must only contain a single JSON value");
}

#[tokio::test]
async fn create_movie_rejects_oversized_body() {
    let body = format!(r#"{{"title": "{}"}}"#, "a".repeat(1_100_000));
    let (status, body) = post_movies(test_app(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "body must not be larger than 1048576 bytes"
    );
}

#[tokio::test]
async fn create_movie_rejects_bad_runtime_format() {
    let (status, body) = post_movies(test_app(), r#"{"runtime": "107 minutes"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("invalid runtime format"));
}

#[tokio::test]
async fn show_movie_returns_placeholder_record() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/movies/123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["id"], 123);
    assert_eq!(value["title"], "Casablanca");
    assert_eq!(value["year"], 2002);
    assert_eq!(value["runtime"], "102 mins");
    assert_eq!(value["genres"], json!(["drama", "romance", "war"]));
    assert_eq!(value["version"], 1);
    assert!(value.get("created_at").is_none());
}

#[tokio::test]
async fn show_movie_rejects_invalid_ids() {
    for uri in ["/v1/movies/0", "/v1/movies/-1", "/v1/movies/abc"] {
        let (status, body) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri: {uri}");
        assert_eq!(
            error_message(&body),
            "the requested resource could not be found"
        );
    }
}

#[tokio::test]
async fn unmatched_route_returns_json_not_found() {
    let (status, body) = get(test_app(), "/v1/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&body),
        "the requested resource could not be found"
    );
}

#[tokio::test]
async fn unsupported_method_returns_json_error() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/healthcheck")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        value["error"],
        "the DELETE method is not supported for this resource"
    );
}
