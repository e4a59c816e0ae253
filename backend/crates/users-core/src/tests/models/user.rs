use crate::User;

use serde_json::{Map, Value, json};

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_user_new_keeps_fields() {
    let user = User::new("42", fields(json!({"name": "Ana", "age": 31})));

    assert_eq!(user.id, "42");
    assert_eq!(user.field("name"), Some(&json!("Ana")));
    assert_eq!(user.field("age"), Some(&json!(31)));
}

#[test]
fn test_user_new_discards_client_id() {
    let user = User::new(
        "server-id",
        fields(json!({"id": "client-id", "_id": "mongo-id", "name": "Ana"})),
    );

    assert_eq!(user.id, "server-id");
    assert!(user.field("id").is_none());
    assert!(user.field("_id").is_none());
    assert_eq!(user.fields.len(), 1);
}

#[test]
fn test_user_serializes_flat() {
    let user = User::new("1760781234567890123", fields(json!({"name": "Ana"})));

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json, json!({"id": "1760781234567890123", "name": "Ana"}));
}

#[test]
fn test_user_serializes_id_first() {
    let user = User::new("7", fields(json!({"age": 1, "name": "Ana"})));

    let text = serde_json::to_string(&user).unwrap();

    assert!(text.starts_with(r#"{"id":"7""#));
}

#[test]
fn test_user_round_trips_nested_fields() {
    let original = User::new(
        "7",
        fields(json!({
            "name": "Ana",
            "tags": ["a", "b"],
            "address": {"city": "Lisbon", "zip": null},
            "active": true,
            "score": 1.5
        })),
    );

    let text = serde_json::to_string(&original).unwrap();
    let decoded: User = serde_json::from_str(&text).unwrap();

    assert_eq!(decoded, original);
}
