//! User entity - the single document type served by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys that carry identity. They are owned by the server and dropped from
/// client-supplied fields.
pub const RESERVED_FIELDS: [&str; 2] = ["id", "_id"];

/// A user document.
///
/// Only `id` is fixed. Every other field is kept exactly as the client sent
/// it and serialized back at the top level, so `{"name":"Ana"}` becomes
/// `{"id":"...","name":"Ana"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    /// Create a user with a server-assigned id.
    ///
    /// Any `id` or `_id` present in `fields` is discarded.
    pub fn new(id: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        for key in RESERVED_FIELDS {
            fields.remove(key);
        }

        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
