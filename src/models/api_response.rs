use serde::Deserialize;
use serde_json::Value;

/// Value of the envelope `status` field for a successful call.
pub const STATUS_SUCCESS: &str = "success";

/// Standard response envelope returned by every CakeMail endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    /// `"success"` or `"failed"`.
    pub status: String,

    /// The payload on success, the error description on failure. A JSON
    /// `null` and a missing field are both `None`.
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// The vendor error description, verbatim.
    ///
    /// A string payload is returned as is; any other JSON is returned as its
    /// JSON text so nothing the server said is lost.
    pub fn error_message(&self) -> String {
        match &self.data {
            Some(Value::String(msg)) => msg.clone(),
            Some(other) => other.to_string(),
            None => "Unknown API error".to_string(),
        }
    }
}
