//! The session store.
//!
//! Single-writer sequential state container for the authenticated session.
//! Operations are async and network-bound; the state mutex is only ever
//! held for synchronous mutation, never across an await.
//!
//! Out-of-order async resolution (a slow login resolving after a
//! subsequent logout already settled) is guarded by sequence numbers:
//! every session-mutating operation takes a monotonically increasing
//! sequence at issue time, and a result is discarded when a
//! higher-sequence operation has already settled — last completed wins.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use pulse_api::auth::{JoinOrgSignup, LoginCredentials, NewOrgSignup};
use pulse_core::Identity;

use crate::artifact::SessionArtifact;
use crate::collaborator::AuthCollaborator;

// ---------------------------------------------------------------------------
// SessionPhase
// ---------------------------------------------------------------------------

/// Lifecycle phase of the client session.
///
/// ```text
/// uninitialized → authenticated
///               → anonymous
/// authenticated ⇄ anonymous   (login / logout)
/// ```
///
/// Both post-boot phases are terminal for initialization: `initialized`
/// never reverts once the first auto-login attempt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Uninitialized,
    Authenticated,
    Anonymous,
}

impl SessionPhase {
    /// Valid next phases from the current phase.
    #[must_use]
    pub const fn allowed_next_phases(self) -> &'static [Self] {
        match self {
            Self::Uninitialized => &[Self::Authenticated, Self::Anonymous],
            Self::Authenticated => &[Self::Anonymous],
            Self::Anonymous => &[Self::Authenticated],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_phases().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Authenticated => "authenticated",
            Self::Anonymous => "anonymous",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Snapshot of the session: the Identity-or-none, transient flags, and the
/// named error slots. Distinct slots keep concurrent form errors (org
/// creation vs. signup) from clobbering each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True while any auth network operation is in flight.
    pub loading: bool,
    /// Becomes true exactly once, after the first auto-login attempt
    /// resolves, and never reverts.
    pub initialized: bool,
    pub error_login: Option<String>,
    pub error_register_new_org: Option<String>,
    pub error_register_existing_org: Option<String>,
}

impl SessionState {
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        if !self.initialized {
            SessionPhase::Uninitialized
        } else if self.identity.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

struct Inner {
    state: SessionState,
    /// Sequence issued to the most recent operation.
    issued: u64,
    /// Sequence of the most recently settled operation.
    settled: u64,
}

/// Owner of the session. Constructed with its collaborator and artifact
/// and passed explicitly to route guard and view composition call sites.
pub struct SessionStore<C> {
    collaborator: C,
    artifact: SessionArtifact,
    inner: Mutex<Inner>,
}

impl<C: AuthCollaborator> SessionStore<C> {
    #[must_use]
    pub const fn new(collaborator: C, artifact: SessionArtifact) -> Self {
        Self {
            collaborator,
            artifact,
            inner: Mutex::new(Inner {
                state: SessionState {
                    identity: None,
                    loading: false,
                    initialized: false,
                    error_login: None,
                    error_register_new_org: None,
                    error_register_existing_org: None,
                },
                issued: 0,
                settled: 0,
            }),
        }
    }

    /// Current state, cloned. Readers never hold the store's lock.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Current identity, cloned.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.lock().state.identity.clone()
    }

    /// Silent session resumption. Never fails from the caller's
    /// perspective: an expired or absent session is an expected outcome,
    /// absorbed into the Anonymous phase. Always leaves
    /// `initialized = true` and `loading = false`.
    pub async fn auto_login(&self) {
        let seq = self.begin(|_| {});
        let result = self.collaborator.current_user().await;

        let mut inner = self.lock();
        let applied = Self::settle(&mut inner, seq);
        inner.state.initialized = true;
        if !applied {
            tracing::debug!("stale auto-login result discarded");
            return;
        }
        let identity = match result {
            Ok(body) => body.into_identity(),
            Err(error) => {
                tracing::debug!(%error, "silent auto-login failed");
                None
            }
        };
        match identity {
            Some(identity) => {
                self.artifact.save(&identity);
                inner.state.identity = Some(identity);
            }
            None => {
                self.artifact.clear();
                inner.state.identity = None;
            }
        }
    }

    /// Log in with email and password. On failure the collaborator's
    /// message lands in `error_login` and the identity is untouched.
    pub async fn login(&self, credentials: &LoginCredentials) {
        let seq = self.begin(|state| state.error_login = None);
        let result = self.collaborator.login(credentials).await;

        let mut inner = self.lock();
        if !Self::settle(&mut inner, seq) {
            tracing::debug!("stale login result discarded");
            return;
        }
        match result {
            Ok(payload) => {
                let identity = payload.into_login_identity();
                self.artifact.save(&identity);
                inner.state.identity = Some(identity);
            }
            Err(error) => {
                inner.state.error_login = Some(error.user_message());
            }
        }
    }

    /// Complete a new-organization signup. Success implicitly
    /// authenticates when the payload carries a username.
    pub async fn register_for_new_org(&self, org_id: &str, signup: &NewOrgSignup) {
        let seq = self.begin(|state| state.error_register_new_org = None);
        let result = self.collaborator.register_for_new_org(org_id, signup).await;

        let mut inner = self.lock();
        if !Self::settle(&mut inner, seq) {
            tracing::debug!("stale registration result discarded");
            return;
        }
        match result {
            Ok(payload) => {
                if let Some(identity) = payload.into_registered_identity() {
                    self.artifact.save(&identity);
                    inner.state.identity = Some(identity);
                }
            }
            Err(error) => {
                inner.state.error_register_new_org = Some(error.user_message());
            }
        }
    }

    /// Join an existing organization by invitation. Same contract shape as
    /// [`Self::register_for_new_org`], distinct error slot.
    pub async fn register_for_existing_org(&self, signup: &JoinOrgSignup) {
        let seq = self.begin(|state| state.error_register_existing_org = None);
        let result = self.collaborator.register_for_existing_org(signup).await;

        let mut inner = self.lock();
        if !Self::settle(&mut inner, seq) {
            tracing::debug!("stale registration result discarded");
            return;
        }
        match result {
            Ok(payload) => {
                if let Some(identity) = payload.into_registered_identity() {
                    self.artifact.save(&identity);
                    inner.state.identity = Some(identity);
                }
            }
            Err(error) => {
                inner.state.error_register_existing_org = Some(error.user_message());
            }
        }
    }

    /// Log out. Locally authoritative: the session always lands Anonymous
    /// with every error slot cleared, even when the remote call fails.
    /// This operation cannot fail from the caller's perspective.
    pub async fn logout(&self) {
        let seq = self.issue();
        if let Err(error) = self.collaborator.logout().await {
            tracing::warn!(%error, "backend logout failed");
        }

        let mut inner = self.lock();
        if inner.settled > seq {
            tracing::debug!("stale logout result discarded");
            return;
        }
        inner.settled = seq;
        self.artifact.clear();
        inner.state.identity = None;
        inner.state.error_login = None;
        inner.state.error_register_new_org = None;
        inner.state.error_register_existing_org = None;
    }

    /// Reset all three error slots without touching the identity. Used
    /// when switching between auth-flow views so stale errors don't leak
    /// across forms. Idempotent.
    pub fn clear_auth_errors(&self) {
        let mut inner = self.lock();
        inner.state.error_login = None;
        inner.state.error_register_new_org = None;
        inner.state.error_register_existing_org = None;
    }

    /// Issue a sequence number and flag the in-flight operation.
    fn begin(&self, pending: impl FnOnce(&mut SessionState)) -> u64 {
        let mut inner = self.lock();
        inner.state.loading = true;
        pending(&mut inner.state);
        inner.issued += 1;
        inner.issued
    }

    /// Issue a sequence number without touching the loading flag (logout
    /// renders no spinner).
    fn issue(&self) -> u64 {
        let mut inner = self.lock();
        inner.issued += 1;
        inner.issued
    }

    /// Clear the loading flag and decide whether this operation's result
    /// may be applied. Returns false when a higher-sequence operation has
    /// already settled.
    fn settle(inner: &mut Inner, seq: u64) -> bool {
        inner.state.loading = false;
        if inner.settled > seq {
            return false;
        }
        inner.settled = seq;
        true
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uninitialized_may_resolve_either_way() {
        assert!(SessionPhase::Uninitialized.can_transition_to(SessionPhase::Authenticated));
        assert!(SessionPhase::Uninitialized.can_transition_to(SessionPhase::Anonymous));
    }

    #[test]
    fn post_boot_phases_toggle_via_login_and_logout() {
        assert!(SessionPhase::Anonymous.can_transition_to(SessionPhase::Authenticated));
        assert!(SessionPhase::Authenticated.can_transition_to(SessionPhase::Anonymous));
        assert!(!SessionPhase::Authenticated.can_transition_to(SessionPhase::Uninitialized));
        assert!(!SessionPhase::Anonymous.can_transition_to(SessionPhase::Uninitialized));
    }

    #[test]
    fn phase_derivation_from_state() {
        let mut state = SessionState::default();
        assert_eq!(state.phase(), SessionPhase::Uninitialized);

        state.initialized = true;
        assert_eq!(state.phase(), SessionPhase::Anonymous);

        state.identity = Some(Identity {
            username: "alice".into(),
            email: None,
            organization_id: None,
            roles: vec![],
            department_id: None,
            team_id: None,
        });
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert!(state.is_authenticated());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(SessionPhase::Uninitialized.to_string(), "uninitialized");
        assert_eq!(SessionPhase::Authenticated.to_string(), "authenticated");
        assert_eq!(SessionPhase::Anonymous.to_string(), "anonymous");
    }
}
