use crate::error::ApiError;
use serde_json::Value;

pub struct Guard {}

impl Guard {
    /// Parses a request body which is required to be JSON
    pub fn against_malformed_json(body: &[u8]) -> Result<Value, ApiError> {
        if body.is_empty() {
            return Err(ApiError::BadClientData("empty body".into()));
        }
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidJson(e.to_string()))
    }

    /// Extracts the `id` field of a request body
    pub fn against_missing_id(body: &Value) -> Result<String, ApiError> {
        match body.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
            None | Some(Value::Null) | Some(Value::String(_)) => {
                Err(ApiError::BadClientData("missing id".into()))
            }
            Some(_) => Err(ApiError::BadClientData("id must be a string".into())),
        }
    }
}
