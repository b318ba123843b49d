//! API error types.

use thiserror::Error;

/// Errors from the REST collaborators.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error, including the fixed per-request timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status. `message` and `error`
    /// are the fields of the error body, when one was parseable.
    #[error("API error ({status}): {}", .message.as_deref().or(.error.as_deref()).unwrap_or("An error occurred"))]
    Api {
        status: u16,
        message: Option<String>,
        error: Option<String>,
    },

    /// The silent session check failed even after a refresh attempt.
    #[error("session expired")]
    SessionExpired,
}

impl ApiError {
    /// Human-readable text for the UI error slots.
    ///
    /// Preference order for backend-reported errors: `message`, then
    /// `error`, then a generic fallback; transport errors surface their
    /// own text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, error, .. } => message
                .as_deref()
                .or(error.as_deref())
                .unwrap_or("An error occurred")
                .to_string(),
            Self::Http(source) => {
                let text = source.to_string();
                if text.is_empty() {
                    "Unknown error".to_string()
                } else {
                    text
                }
            }
            Self::SessionExpired => {
                "Session verification and refresh failed. Please log in again.".to_string()
            }
        }
    }

    /// Status code for backend-reported errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn user_message_prefers_message_over_error() {
        let err = ApiError::Api {
            status: 400,
            message: Some("Invalid credentials".into()),
            error: Some("Bad Request".into()),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn user_message_falls_back_to_error_field() {
        let err = ApiError::Api {
            status: 400,
            message: None,
            error: Some("Bad Request".into()),
        };
        assert_eq!(err.user_message(), "Bad Request");
    }

    #[test]
    fn user_message_generic_when_body_had_neither_field() {
        let err = ApiError::Api {
            status: 500,
            message: None,
            error: None,
        };
        assert_eq!(err.user_message(), "An error occurred");
    }

    #[test]
    fn session_expired_has_the_relogin_message() {
        assert_eq!(
            ApiError::SessionExpired.user_message(),
            "Session verification and refresh failed. Please log in again."
        );
    }
}
