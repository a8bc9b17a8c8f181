use serde::{Deserialize, Serialize};

/// Body of every unsuccessful response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Machine readable reason, e.g. `empty body` or `id not found`
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
