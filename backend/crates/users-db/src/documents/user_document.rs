//! Mapping between `User` and its stored BSON document.
//!
//! Stored shape: `{ _id: <user id>, ...fields }`. Field values are mapped
//! structurally in both directions. Client objects are never read as
//! Extended JSON, so `{"$oid": ...}` is stored as a plain embedded document.

use crate::{DbError, Result as DbErrorResult};

use users_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use mongodb::bson::{Bson, Document, doc};
use serde_json::{Map, Number, Value};

pub const ID_FIELD: &str = "_id";

/// Filter matching exactly one user by primary key
pub fn id_filter(id: &str) -> Document {
    doc! { "_id": id }
}

pub fn user_to_document(user: &User) -> DbErrorResult<Document> {
    let mut document = Document::new();
    document.insert(ID_FIELD, user.id.as_str());
    for (key, value) in &user.fields {
        if key != ID_FIELD {
            document.insert(key.as_str(), json_to_bson(&user.id, value)?);
        }
    }

    Ok(document)
}

pub fn user_from_document(mut document: Document) -> DbErrorResult<User> {
    let id = match document.remove(ID_FIELD) {
        Some(Bson::String(id)) => id,
        Some(other) => {
            return Err(DbError::InvalidDocument {
                message: format!("_id must be a string, found {:?}", other.element_type()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        None => {
            return Err(DbError::InvalidDocument {
                message: "missing _id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let fields = document_to_map(&id, document)?;
    Ok(User::new(id, fields))
}

fn json_to_bson(id: &str, value: &Value) -> DbErrorResult<Bson> {
    let bson = match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Bson::Int64(i)
            } else if n.is_u64() {
                // BSON has no unsigned 64-bit integer
                return Err(DbError::Bson {
                    message: format!("user {}: integer {} does not fit in i64", id, n),
                    location: ErrorLocation::from(Location::caller()),
                });
            } else {
                match n.as_f64() {
                    Some(f) => Bson::Double(f),
                    None => {
                        return Err(DbError::Bson {
                            message: format!("user {}: unsupported number {}", id, n),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                }
            }
        }
        Value::String(s) => Bson::String(s.clone()),
        Value::Array(items) => Bson::Array(
            items
                .iter()
                .map(|item| json_to_bson(id, item))
                .collect::<DbErrorResult<Vec<_>>>()?,
        ),
        Value::Object(fields) => {
            let mut nested = Document::new();
            for (key, value) in fields {
                nested.insert(key.as_str(), json_to_bson(id, value)?);
            }
            Bson::Document(nested)
        }
    };

    Ok(bson)
}

fn document_to_map(id: &str, document: Document) -> DbErrorResult<Map<String, Value>> {
    document
        .into_iter()
        .map(|(key, value)| Ok((key, bson_to_json(id, value)?)))
        .collect()
}

fn bson_to_json(id: &str, value: Bson) -> DbErrorResult<Value> {
    let json = match value {
        Bson::Null => Value::Null,
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(i) => Value::Number(i.into()),
        Bson::Int64(i) => Value::Number(i.into()),
        Bson::Double(f) => match Number::from_f64(f) {
            Some(n) => Value::Number(n),
            None => {
                return Err(DbError::Bson {
                    message: format!("user {}: {} is not representable in JSON", id, f),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        },
        Bson::String(s) => Value::String(s),
        Bson::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| bson_to_json(id, item))
                .collect::<DbErrorResult<Vec<_>>>()?,
        ),
        Bson::Document(nested) => Value::Object(document_to_map(id, nested)?),
        // Types this service never writes, e.g. from documents inserted by other tools
        other => other.into_relaxed_extjson(),
    };

    Ok(json)
}
