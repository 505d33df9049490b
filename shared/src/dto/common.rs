use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::forms::FieldErrors;

/// The `{ success, message, data }` wrapper most endpoints answer with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Acknowledgement with no payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body as sent by the backend on a non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<Value>,
}

impl ApiErrorBody {
    /// Parses a body that may be JSON or a bare string.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::String(message)) => Self { message: Some(message), ..Self::default() },
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ if !text.trim().is_empty() && !text.trim_start().starts_with('<') => Self {
                message: Some(text.trim().to_string()),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .filter(|m| !m.trim().is_empty())
    }

    /// Field messages from either `[{ path, message }]` or `{ field: message | {message} | [..] }`.
    pub fn field_errors(&self) -> FieldErrors {
        let mut fields = FieldErrors::default();
        match &self.errors {
            Some(Value::Array(items)) => {
                for item in items {
                    let path = match item.get("path") {
                        Some(Value::Array(parts)) => parts.first().and_then(Value::as_str),
                        Some(Value::String(path)) => Some(path.as_str()),
                        _ => None,
                    };
                    let message = item.get("message").and_then(Value::as_str);
                    if let (Some(path), Some(message)) = (path, message) {
                        fields.insert(path.to_string(), message.to_string());
                    }
                }
            }
            Some(Value::Object(map)) => {
                for (key, value) in map {
                    let message = match value {
                        Value::String(s) => Some(s.clone()),
                        Value::Object(o) => o.get("message").and_then(Value::as_str).map(str::to_string),
                        Value::Array(list) => list.first().map(|first| match first {
                            Value::String(s) => s.clone(),
                            other => other
                                .get("message")
                                .and_then(Value::as_str)
                                .unwrap_or("Invalid value")
                                .to_string(),
                        }),
                        _ => None,
                    };
                    if let Some(message) = message {
                        fields.insert(key.clone(), message);
                    }
                }
            }
            _ => {}
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_prefers_message_then_error() {
        let body = ApiErrorBody::parse(r#"{"error":"Duplicate email"}"#);
        assert_eq!(body.message().as_deref(), Some("Duplicate email"));
        let body = ApiErrorBody::parse(r#""plain failure""#);
        assert_eq!(body.message().as_deref(), Some("plain failure"));
        assert_eq!(ApiErrorBody::parse("<html>").message(), None);
    }

    #[test]
    fn zod_array_errors_become_field_errors() {
        let body = ApiErrorBody::parse(
            r#"{"message":"Invalid","errors":[{"path":["email"],"message":"Email taken"},{"path":"zipCode","message":"Bad zip"}]}"#,
        );
        let fields = body.field_errors();
        assert_eq!(fields.get("email"), Some("Email taken"));
        assert_eq!(fields.get("zipCode"), Some("Bad zip"));
    }

    #[test]
    fn object_errors_in_every_shape() {
        let body = ApiErrorBody::parse(
            r#"{"errors":{"name":"Too short","state":{"message":"Unknown state"},"contact":["Bad number"],"password":[{"code":"x"}],"ignored":5}}"#,
        );
        let fields = body.field_errors();
        assert_eq!(fields.get("name"), Some("Too short"));
        assert_eq!(fields.get("state"), Some("Unknown state"));
        assert_eq!(fields.get("contact"), Some("Bad number"));
        assert_eq!(fields.get("password"), Some("Invalid value"));
        assert_eq!(fields.get("ignored"), None);
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let env: ApiEnvelope<Vec<u8>> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
    }
}
