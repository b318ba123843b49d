//! Shared HTTP response helpers for the collaborator clients.
//!
//! Centralizes status-code checking and error-body parsing so individual
//! endpoint modules stay focused on request construction and response
//! mapping. Backend error bodies carry `{message}` or `{error}`; both are
//! captured for the caller's preference order.

use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. A non-success status is
/// turned into [`ApiError::Api`] with the error body parsed when the
/// backend sent one (non-JSON or empty bodies degrade to the generic
/// message downstream).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
    if parsed.message.is_none() && parsed.error.is_none() {
        tracing::debug!(status, body = %body, "backend error without message body");
    }
    Err(ApiError::Api {
        status,
        message: parsed.message,
        error: parsed.error,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, r#"{"ok": true}"#);
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn error_body_message_is_captured() {
        let resp = mock_response(401, r#"{"message": "Invalid credentials"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn error_body_error_field_is_captured() {
        let resp = mock_response(409, r#"{"error": "user already exists"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.user_message(), "user already exists");
    }

    #[tokio::test]
    async fn message_wins_over_error_field() {
        let resp = mock_response(400, r#"{"message": "specific", "error": "generic"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.user_message(), "specific");
    }

    #[tokio::test]
    async fn non_json_body_degrades_to_generic_message() {
        let resp = mock_response(502, "<html>Bad Gateway</html>");
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.user_message(), "An error occurred");
        assert_eq!(err.status(), Some(502));
    }
}
