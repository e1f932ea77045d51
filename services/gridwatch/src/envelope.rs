//! Server response envelope
//!
//! The server wraps most responses as `{ "success": bool, "message": ..., "data": ... }`,
//! but some endpoints answer with bare JSON. Which shape a body has is decided
//! by the presence of a `success` key on an object, never by the HTTP status.

use serde_json::Value;

use crate::error::{GridwatchError, DEFAULT_FAILURE_MESSAGE};

/// A classified response body
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Standard {
        success: bool,
        message: Option<String>,
        data: Option<Value>,
    },
    Raw(Value),
}

impl Envelope {
    /// Parse a response body and classify it
    pub fn parse(body: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            GridwatchError::Transport(format!("Response body is not valid JSON: {}", e))
        })?;
        Ok(Self::classify(value))
    }

    /// Classify an already parsed JSON value
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("success") => {
                let success = map.get("success").is_some_and(is_truthy);
                let message = map.remove("message").and_then(message_text);
                let data = map.remove("data");
                Envelope::Standard {
                    success,
                    message,
                    data,
                }
            }
            other => Envelope::Raw(other),
        }
    }

    /// Resolve to the payload, or an application error for `success: false`
    pub fn into_result(self) -> crate::Result<Option<Value>> {
        match self {
            Envelope::Standard {
                success: true,
                data,
                ..
            } => Ok(data),
            Envelope::Standard {
                success: false,
                message,
                ..
            } => Err(GridwatchError::Application {
                message: message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            }),
            Envelope::Raw(value) => Ok(Some(value)),
        }
    }
}

/// JSON truthiness: `false`, `null`, `0` and `""` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn message_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Null => None,
        other if !is_truthy(&other) => None,
        other => Some(other.to_string()),
    }
}
