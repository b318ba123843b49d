//! The local session artifact.
//!
//! A cached snapshot of the authenticated identity at
//! `~/.pulse/auth_state.json`, written on successful authentication and
//! removed on logout and on auto-login failure (a stale artifact must not
//! outlive a dead session). Nothing in this crate reads it back — it
//! exists for surrounding tooling.
//!
//! All I/O failures are logged and swallowed: the artifact is a cache,
//! never a source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use pulse_core::Identity;

const ARTIFACT_FILE_NAME: &str = "auth_state.json";

#[derive(Debug, Clone)]
pub struct SessionArtifact {
    path: Option<PathBuf>,
}

impl SessionArtifact {
    /// Artifact at the default location (`~/.pulse/auth_state.json`).
    /// Degrades to a no-op when no home directory can be resolved.
    #[must_use]
    pub fn at_default_location() -> Self {
        let path = dirs::home_dir().map(|home| home.join(".pulse").join(ARTIFACT_FILE_NAME));
        if path.is_none() {
            tracing::warn!("home directory not found; session artifact disabled");
        }
        Self { path }
    }

    /// Artifact at an explicit path.
    #[must_use]
    pub const fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// No-op artifact, for tests.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { path: None }
    }

    /// Write the identity snapshot.
    pub fn save(&self, identity: &Identity) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(error) = write_snapshot(path, identity) {
            tracing::warn!(%error, path = %path.display(), "failed to write session artifact");
        }
    }

    /// Remove the snapshot, if present.
    pub fn clear(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if path.exists()
            && let Err(error) = fs::remove_file(path)
        {
            tracing::warn!(%error, path = %path.display(), "failed to remove session artifact");
        }
    }

    /// Whether a snapshot currently exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.as_ref().is_some_and(|path| path.exists())
    }
}

fn write_snapshot(path: &Path, identity: &Identity) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }
    let json = serde_json::to_string(identity).map_err(std::io::Error::other)?;
    fs::write(path, json)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn identity() -> Identity {
        Identity {
            username: "alice".into(),
            email: None,
            organization_id: Some("org-1".into()),
            roles: vec!["TEAM MANAGER".into()],
            department_id: None,
            team_id: None,
        }
    }

    #[test]
    fn save_and_clear_cycle() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("auth_state.json");
        let artifact = SessionArtifact::at_path(path.clone());

        artifact.save(&identity());
        assert!(artifact.exists());

        let raw = fs::read_to_string(&path).expect("read");
        let parsed: Identity = serde_json::from_str(&raw).expect("parse");
        assert_eq!(parsed.username, "alice");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "artifact should be 0600");
        }

        artifact.clear();
        assert!(!artifact.exists());
    }

    #[test]
    fn clear_on_missing_file_is_a_no_op() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let artifact = SessionArtifact::at_path(dir.path().join("never_written.json"));
        artifact.clear();
        assert!(!artifact.exists());
    }

    #[test]
    fn disabled_artifact_never_touches_disk() {
        let artifact = SessionArtifact::disabled();
        artifact.save(&identity());
        artifact.clear();
        assert!(!artifact.exists());
    }
}
