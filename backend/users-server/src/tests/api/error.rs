use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_text(error: ApiError) -> (StatusCode, String, String) {
    let response = error.into_response();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_plain_text_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, content_type, body) = body_text(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "User not found\n");
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let error = ApiError::bad_request("EOF while parsing a value at line 1 column 0");

    let (status, _, body) = body_text(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "EOF while parsing a value at line 1 column 0\n");
}

#[tokio::test]
async fn test_internal_error_returns_500_without_location() {
    let error = ApiError::internal("Failed to create user");

    let (status, _, body) = body_text(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to create user\n");
}

#[test]
fn test_display_is_prefixed_by_kind() {
    let error = ApiError::not_found("User not found");

    let text = error.to_string();

    assert!(text.starts_with("Resource not found: User not found"));
}

#[test]
fn test_status_mapping() {
    assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ApiError::internal("x").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
