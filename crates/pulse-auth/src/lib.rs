//! # pulse-auth
//!
//! The session store: owns the single Identity-or-none, the loading and
//! initialized flags, and the named auth error slots. All session
//! mutations go through [`SessionStore`](session::SessionStore), which is
//! constructed with an explicit collaborator (the
//! [`AuthCollaborator`](collaborator::AuthCollaborator) seam) and passed
//! to whoever needs it — there is no ambient global session.
//!
//! Auth operations never return errors: failure is absorbed into state,
//! either silently (an expected missing session at boot) or as a stored
//! human-readable error string.

pub mod artifact;
pub mod collaborator;
pub mod session;

pub use artifact::SessionArtifact;
pub use collaborator::AuthCollaborator;
pub use session::{SessionPhase, SessionState, SessionStore};
