//! Auth collaborator endpoints and wire shapes.
//!
//! The backend's auth responses are duck-typed: depending on the
//! registration path, a successful login body is either a full user object
//! wrapped in `{"user": …}` or a flat minimal `{username, organizationId,
//! roles}` shape. Both are modeled explicitly as [`AuthPayload`] and
//! normalized into an [`Identity`] here, at the collaborator boundary —
//! nothing downstream touches untyped JSON.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use pulse_core::Identity;

use crate::error::ApiError;
use crate::http::check_response;
use crate::ApiClient;

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Signup payload for completing a new-organization registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrgSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Signup payload for joining an existing organization by invitation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOrgSignup {
    pub username: String,
    pub email: String,
    pub password: String,
    pub invite_code: String,
}

/// A successful login/registration body, in either of its two shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthPayload {
    /// Full user object under a `user` key.
    Enveloped { user: Identity },
    /// Flat minimal shape.
    Flat(FlatAuthUser),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatAuthUser {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthPayload {
    /// Normalize a login body. The flat shape always yields an identity,
    /// even when sparse — a successful login authenticates.
    #[must_use]
    pub fn into_login_identity(self) -> Identity {
        match self {
            Self::Enveloped { user } => user,
            Self::Flat(flat) => Identity {
                username: flat.username.unwrap_or_default(),
                email: None,
                organization_id: flat.organization_id,
                roles: flat.roles,
                department_id: None,
                team_id: None,
            },
        }
    }

    /// Normalize a registration body. Registration only authenticates when
    /// the flat shape carries a username; anything else leaves the session
    /// untouched.
    #[must_use]
    pub fn into_registered_identity(self) -> Option<Identity> {
        match self {
            Self::Flat(FlatAuthUser {
                username: Some(username),
                organization_id,
                roles,
                ..
            }) => Some(Identity {
                username,
                email: None,
                organization_id,
                roles,
                department_id: None,
                team_id: None,
            }),
            _ => None,
        }
    }
}

/// Body of `GET /auth/me`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl CurrentUserBody {
    /// Normalize into an [`Identity`]. `success: false` (or a body without
    /// a username) means the session is not valid.
    #[must_use]
    pub fn into_identity(self) -> Option<Identity> {
        if !self.success {
            return None;
        }
        Some(Identity {
            username: self.username?,
            email: self.email,
            organization_id: self.organization_id,
            roles: self.roles,
            department_id: self.department_id,
            team_id: self.team_id,
        })
    }
}

impl ApiClient {
    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, ApiError> {
        let resp = self
            .request(Method::POST, "/auth/login")
            .json(credentials)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `POST /auth/register/{orgId}` — new-organization signup completion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn register_for_new_org(
        &self,
        org_id: &str,
        signup: &NewOrgSignup,
    ) -> Result<AuthPayload, ApiError> {
        let resp = self
            .request(Method::POST, &format!("/auth/register/{org_id}"))
            .json(signup)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `POST /auth/register` — join an existing organization.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn register_for_existing_org(
        &self,
        signup: &JoinOrgSignup,
    ) -> Result<AuthPayload, ApiError> {
        let resp = self
            .request(Method::POST, "/auth/register")
            .json(signup)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `GET /auth/me`, with one silent `POST /auth/refresh` and one retry
    /// on a 401. A second failure propagates as
    /// [`ApiError::SessionExpired`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] when the session cannot be
    /// resumed, or another [`ApiError`] for non-401 failures of the first
    /// attempt.
    pub async fn current_user(&self) -> Result<CurrentUserBody, ApiError> {
        match self.fetch_me().await {
            Err(ApiError::Api { status: 401, .. }) => {
                tracing::debug!("session check returned 401; attempting silent refresh");
                self.refresh_session().await.map_err(|error| {
                    tracing::debug!(%error, "silent refresh failed");
                    ApiError::SessionExpired
                })?;
                self.fetch_me().await.map_err(|error| {
                    tracing::debug!(%error, "session check failed after refresh");
                    ApiError::SessionExpired
                })
            }
            other => other,
        }
    }

    /// `POST /auth/logout` — best-effort; the caller treats logout as
    /// locally authoritative regardless of the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let resp = self.request(Method::POST, "/auth/logout").send().await?;
        check_response(resp).await?;
        Ok(())
    }

    async fn fetch_me(&self) -> Result<CurrentUserBody, ApiError> {
        let resp = self.request(Method::GET, "/auth/me").send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    async fn refresh_session(&self) -> Result<(), ApiError> {
        let resp = self.request(Method::POST, "/auth/refresh").send().await?;
        check_response(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn enveloped_payload_normalizes_to_the_full_user() {
        let payload: AuthPayload = serde_json::from_str(
            r#"{"user": {"username": "alice", "email": "a@b.com", "organizationId": "org-1", "roles": ["TEAM MANAGER"]}}"#,
        )
        .expect("should deserialize");

        let identity = payload.into_login_identity();
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.email.as_deref(), Some("a@b.com"));
        assert_eq!(identity.roles, vec!["TEAM MANAGER"]);
    }

    #[test]
    fn flat_payload_normalizes_to_the_minimal_user() {
        let payload: AuthPayload = serde_json::from_str(
            r#"{"success": true, "username": "alice", "organizationId": "org-1", "roles": ["TEAM MANAGER"]}"#,
        )
        .expect("should deserialize");

        let identity = payload.into_login_identity();
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.email, None);
        assert_eq!(identity.organization_id.as_deref(), Some("org-1"));
        assert_eq!(identity.roles, vec!["TEAM MANAGER"]);
    }

    #[test]
    fn registration_without_username_yields_no_identity() {
        let payload: AuthPayload =
            serde_json::from_str(r#"{"success": true}"#).expect("should deserialize");
        assert_eq!(payload.into_registered_identity(), None);
    }

    #[test]
    fn registration_with_username_authenticates() {
        let payload: AuthPayload = serde_json::from_str(
            r#"{"username": "bob", "organizationId": "org-2", "roles": []}"#,
        )
        .expect("should deserialize");
        let identity = payload.into_registered_identity().expect("identity");
        assert_eq!(identity.username, "bob");
        assert!(identity.roles.is_empty());
    }

    #[test]
    fn me_body_with_success_false_is_not_a_session() {
        let body: CurrentUserBody =
            serde_json::from_str(r#"{"success": false, "username": "ghost"}"#)
                .expect("should deserialize");
        assert_eq!(body.into_identity(), None);
    }

    #[test]
    fn me_body_normalizes_all_identity_fields() {
        let body: CurrentUserBody = serde_json::from_str(
            r#"{
                "success": true,
                "username": "carol",
                "email": "c@d.com",
                "organizationId": "org-3",
                "roles": ["DEPARTMENT MANAGER"],
                "departmentId": "dep-1",
                "teamId": "team-4"
            }"#,
        )
        .expect("should deserialize");

        let identity = body.into_identity().expect("identity");
        assert_eq!(identity.username, "carol");
        assert_eq!(identity.department_id.as_deref(), Some("dep-1"));
        assert_eq!(identity.team_id.as_deref(), Some("team-4"));
    }

    #[test]
    fn signup_payloads_serialize_with_wire_field_names() {
        let join = JoinOrgSignup {
            username: "dave".into(),
            email: "d@e.com".into(),
            password: "secret1".into(),
            invite_code: "INV-9".into(),
        };
        let json = serde_json::to_value(&join).unwrap();
        assert_eq!(json["inviteCode"], "INV-9");
        assert_eq!(json["username"], "dave");
    }
}
