use crate::{ApiError, ApiResult};

use serde_json::{Map, Value};

/// Body of `POST /user`: any JSON object, or `null` for an empty one. A
/// client-supplied `id` is accepted here and discarded when the user is built.
#[derive(Debug)]
pub struct CreateUserRequest {
    pub fields: Map<String, Value>,
}

impl CreateUserRequest {
    /// Decode a raw request body. The decoder's message is returned to the
    /// client as-is since it only describes their own input.
    pub fn from_body(body: &[u8]) -> ApiResult<Self> {
        let fields: Option<Map<String, Value>> =
            serde_json::from_slice(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

        Ok(Self {
            fields: fields.unwrap_or_default(),
        })
    }
}
