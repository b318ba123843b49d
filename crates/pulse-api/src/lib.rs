//! # pulse-api
//!
//! REST collaborator clients for Pulse.
//!
//! Everything the client core needs from the backend goes through
//! [`ApiClient`]: the auth endpoints (cookie session with CSRF echo),
//! organization registration, and the directory/survey collection loads.
//! Requests share one `reqwest` client with the fixed per-request timeout
//! and a persistent cookie store; mutating verbs echo the `XSRF-TOKEN`
//! cookie into the `X-XSRF-TOKEN` header. No endpoint retries
//! automatically — the only second attempt anywhere is the silent
//! refresh inside [`ApiClient::current_user`].

pub mod auth;
pub mod cookies;
pub mod directory;
mod error;
mod http;
pub mod organization;
pub mod surveys;

pub use cookies::SessionCookieJar;
pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

use pulse_config::PulseConfig;
use reqwest::Method;

/// Cookie the backend issues for CSRF protection.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header the backend expects the cookie echoed into on mutating verbs.
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// HTTP client for the Pulse backend collaborators. Cheap to clone; all
/// clones share the same connection pool and cookie store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    jar: Arc<SessionCookieJar>,
}

impl ApiClient {
    /// Client with the default persistent cookie store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client cannot be built.
    pub fn new(config: &PulseConfig) -> Result<Self, ApiError> {
        Self::with_jar(config, Arc::new(SessionCookieJar::persistent()))
    }

    /// Client over an explicit cookie store (tests, custom locations).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client cannot be built.
    pub fn with_jar(config: &PulseConfig, jar: Arc<SessionCookieJar>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            jar,
        })
    }

    /// The cookie store backing this client.
    #[must_use]
    pub fn cookie_jar(&self) -> &SessionCookieJar {
        &self.jar
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build a request; mutating verbs get the CSRF echo header when the
    /// token cookie is present.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mutating = matches!(
            method,
            Method::POST | Method::PUT | Method::PATCH | Method::DELETE
        );
        let mut builder = self.http.request(method, self.url(path));
        if mutating && let Some(token) = self.jar.get(XSRF_COOKIE) {
            builder = builder.header(XSRF_HEADER, token);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> ApiClient {
        let config = PulseConfig {
            api_url: "http://localhost:8080/api/".into(),
            timeout_secs: 10,
        };
        ApiClient::with_jar(&config, Arc::new(SessionCookieJar::ephemeral()))
            .expect("client should build")
    }

    #[test]
    fn url_joins_without_doubled_slash() {
        let client = client();
        assert_eq!(client.url("/auth/login"), "http://localhost:8080/api/auth/login");
    }

    #[test]
    fn mutating_request_echoes_xsrf_cookie() {
        let client = client();
        {
            use reqwest::cookie::CookieStore as _;
            let header = reqwest::header::HeaderValue::from_static("XSRF-TOKEN=t-123");
            client.jar.set_cookies(
                &mut [&header].into_iter(),
                &reqwest::Url::parse("http://localhost:8080/api").unwrap(),
            );
        }

        let request = client
            .request(Method::POST, "/auth/login")
            .build()
            .expect("request should build");
        assert_eq!(
            request.headers().get(XSRF_HEADER).and_then(|v| v.to_str().ok()),
            Some("t-123")
        );
    }

    #[test]
    fn read_request_skips_xsrf_header() {
        let client = client();
        let request = client
            .request(Method::GET, "/users")
            .build()
            .expect("request should build");
        assert!(request.headers().get(XSRF_HEADER).is_none());
    }

    #[test]
    fn mutating_request_without_token_has_no_header() {
        let client = client();
        let request = client
            .request(Method::POST, "/auth/logout")
            .build()
            .expect("request should build");
        assert!(request.headers().get(XSRF_HEADER).is_none());
    }
}
