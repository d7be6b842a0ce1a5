//! One response-handling strategy for every endpoint.

use crate::error::{detail_message, ApiError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// No body, or a literal JSON `null`.
    Empty,
    Json(T),
    /// Something that is not JSON.
    Text(String),
}

impl Payload<Value> {
    pub fn classify(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Null) => Self::Empty,
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }

    /// Accept any success body as it is, except a `{"detail": ...}` refusal.
    pub fn accept(self) -> Result<Self, ApiError> {
        if let Self::Json(value @ Value::Object(fields)) = &self {
            if fields.len() == 1 {
                if let Some(detail) = detail_message(value) {
                    return Err(ApiError::Rejected(detail));
                }
            }
        }
        Ok(self)
    }

    /// Require a JSON payload that decodes into `T`.
    pub fn into_model<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Self::Empty => Err(ApiError::Decode("empty response body".into())),
            Self::Text(text) => Err(ApiError::Decode(format!("expected JSON, got {text:?}"))),
            Self::Json(value) => decode_value(value),
        }
    }
}

impl<T> Payload<T> {
    pub fn json(self) -> Option<T> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A success status whose body is only `{"detail": ...}` is a refusal, not a
/// malformed model.
fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(model) => Ok(model),
        Err(err) => match detail_message(&value) {
            Some(detail) => Err(ApiError::Rejected(detail)),
            None => Err(err.into()),
        },
    }
}
