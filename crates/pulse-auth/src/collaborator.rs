//! The collaborator seam between the session store and the auth backend.
//!
//! [`SessionStore`](crate::session::SessionStore) is generic over this
//! trait so tests drive the state machine with scripted fakes and the CLI
//! plugs in the real [`ApiClient`].

use pulse_api::ApiError;
use pulse_api::auth::{
    AuthPayload, CurrentUserBody, JoinOrgSignup, LoginCredentials, NewOrgSignup,
};

/// The auth endpoints the session store consumes.
///
/// The store only awaits these futures from its own single-threaded
/// operations; implementations do not need `Send` futures.
#[allow(async_fn_in_trait)]
pub trait AuthCollaborator {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, ApiError>;

    async fn register_for_new_org(
        &self,
        org_id: &str,
        signup: &NewOrgSignup,
    ) -> Result<AuthPayload, ApiError>;

    async fn register_for_existing_org(
        &self,
        signup: &JoinOrgSignup,
    ) -> Result<AuthPayload, ApiError>;

    /// The "who am I" check, including the collaborator's internal silent
    /// refresh-and-retry on a 401.
    async fn current_user(&self) -> Result<CurrentUserBody, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

impl AuthCollaborator for pulse_api::ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, ApiError> {
        Self::login(self, credentials).await
    }

    async fn register_for_new_org(
        &self,
        org_id: &str,
        signup: &NewOrgSignup,
    ) -> Result<AuthPayload, ApiError> {
        Self::register_for_new_org(self, org_id, signup).await
    }

    async fn register_for_existing_org(
        &self,
        signup: &JoinOrgSignup,
    ) -> Result<AuthPayload, ApiError> {
        Self::register_for_existing_org(self, signup).await
    }

    async fn current_user(&self) -> Result<CurrentUserBody, ApiError> {
        Self::current_user(self).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Self::logout(self).await
    }
}
