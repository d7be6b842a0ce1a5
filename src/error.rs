//! Errors surfaced by the API client.
//!
//! Every variant's `Display` is what the pages put in front of the user,
//! usually behind a prefix such as `"Login error: "`.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// Non-2xx status. `message` is the server's `detail`, or `HTTP <status>`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response that only carried a `detail` message.
    #[error("{0}")]
    Rejected(String),

    /// Body did not match the model the endpoint promises.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Build the error for a non-success status from the raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| detail_message(&value))
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server no longer accepts the stored token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Pull a human readable message out of a `{"detail": ...}` body.
///
/// FastAPI-style validation failures send `detail` as a list of objects with
/// a `msg` field; those are joined.
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_error_uses_server_detail() {
        let err = ApiError::from_status(401, r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn http_error_falls_back_to_status() {
        assert_eq!(ApiError::from_status(502, "").to_string(), "HTTP 502");
        assert_eq!(
            ApiError::from_status(500, "<html>oops</html>").to_string(),
            "HTTP 500"
        );
        assert_eq!(ApiError::from_status(404, r#"{"error":"x"}"#).to_string(), "HTTP 404");
    }

    #[test]
    fn validation_details_are_joined() {
        let body = json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "field required"},
                {"loc": ["body", "role"], "msg": "invalid role"}
            ]
        });
        assert_eq!(
            detail_message(&body).as_deref(),
            Some("field required; invalid role")
        );
    }

    #[test]
    fn null_detail_is_ignored() {
        assert_eq!(detail_message(&json!({"detail": null})), None);
    }
}
