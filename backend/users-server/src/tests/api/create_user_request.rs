use crate::{ApiError, CreateUserRequest};

use serde_json::json;

#[test]
fn test_object_body_is_accepted() {
    let request = CreateUserRequest::from_body(br#"{"name":"Ana","age":31}"#).unwrap();

    assert_eq!(request.fields.get("name"), Some(&json!("Ana")));
    assert_eq!(request.fields.get("age"), Some(&json!(31)));
}

#[test]
fn test_client_id_is_kept_until_user_is_built() {
    let request = CreateUserRequest::from_body(br#"{"id":"mine","name":"Ana"}"#).unwrap();

    assert_eq!(request.fields.get("id"), Some(&json!("mine")));
}

#[test]
fn test_empty_object_is_accepted() {
    let request = CreateUserRequest::from_body(b"{}").unwrap();

    assert!(request.fields.is_empty());
}

#[test]
fn test_null_body_is_an_empty_object() {
    let request = CreateUserRequest::from_body(b"null").unwrap();

    assert!(request.fields.is_empty());
}

#[test]
fn test_malformed_json_is_bad_request() {
    let result = CreateUserRequest::from_body(b"{\"name\": ");

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn test_non_object_json_is_bad_request() {
    let bodies: [&[u8]; 3] = [b"[1,2,3]", b"\"Ana\"", b"42"];

    for body in bodies {
        let result = CreateUserRequest::from_body(body);

        assert!(matches!(result, Err(ApiError::BadRequest { .. })));
    }
}

#[test]
fn test_empty_body_is_bad_request() {
    let result = CreateUserRequest::from_body(b"");

    match result {
        Err(ApiError::BadRequest { message, .. }) => assert!(message.contains("EOF")),
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_trailing_data_after_object_is_bad_request() {
    let result = CreateUserRequest::from_body(br#"{"a":1}{"b":2}"#);

    match result {
        Err(ApiError::BadRequest { message, .. }) => {
            assert!(message.contains("trailing characters"))
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}
