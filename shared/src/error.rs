use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

/// Generic message shown for connectivity failures.
pub const TRY_AGAIN_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

/// The three ways a failure surfaces to a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Shown as a generic "try again" message.
    Network,
    /// Shown inline next to the offending field.
    Validation,
    /// Leads to a redirect or the access-denied screen.
    Authorization,
    Other,
}

impl SharedError {
    /// Maps a non-success HTTP status and the server's message to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => Self::Validation(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Server { status, message },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Server { status, .. } if *status >= 500 => ErrorCategory::Network,
            Self::Validation(_) | Self::MissingField(_) => ErrorCategory::Validation,
            Self::Unauthorized(_) | Self::Forbidden(_) | Self::InvalidToken(_) => {
                ErrorCategory::Authorization
            }
            _ => ErrorCategory::Other,
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message the server sent with the response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Server { message: m, .. } => Some(m.as_str()).filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    /// Text suitable for a banner or toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => TRY_AGAIN_MESSAGE.to_string(),
            Self::Server { status, .. } if *status >= 500 => TRY_AGAIN_MESSAGE.to_string(),
            Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Server { message: m, .. }
                if !m.is_empty() =>
            {
                m.clone()
            }
            other => other.to_string(),
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(400, ErrorCategory::Validation)]
    #[test_case(401, ErrorCategory::Authorization)]
    #[test_case(403, ErrorCategory::Authorization)]
    #[test_case(404, ErrorCategory::Other)]
    #[test_case(502, ErrorCategory::Network)]
    fn status_maps_to_category(status: u16, expected: ErrorCategory) {
        assert_eq!(SharedError::from_status(status, "x").category(), expected);
    }

    #[test]
    fn network_failures_read_as_try_again() {
        let err = SharedError::Network("connection refused".into());
        assert_eq!(err.user_message(), TRY_AGAIN_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = SharedError::from_status(409, "Email already registered");
        assert_eq!(err.user_message(), "Email already registered");
        assert_eq!(err.status(), Some(409));
    }
}
