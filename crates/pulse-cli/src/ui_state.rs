//! Persisted dashboard UI state.
//!
//! Remembers the last opened dashboard section at `~/.pulse/ui_state.json`
//! across invocations, the way the browser client keeps its tab selection.
//! The stored value is advisory: the composer re-validates it against the
//! current role's allowed sections on every render, so state persisted
//! under a more privileged role degrades safely.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pulse_core::sections::Section;

const UI_STATE_FILE_NAME: &str = "ui_state.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct UiState {
    active_section: Option<String>,
}

/// Last active dashboard section, if one was persisted and still parses.
#[must_use]
pub fn load_active_section() -> Option<Section> {
    load_from(&default_path()?)
}

/// Persist the active dashboard section. Failures are logged; UI state is
/// never worth failing a command over.
pub fn save_active_section(section: Section) {
    let Some(path) = default_path() else {
        return;
    };
    save_to(&path, section);
}

fn load_from(path: &Path) -> Option<Section> {
    let raw = fs::read_to_string(path).ok()?;
    let state: UiState = serde_json::from_str(&raw).ok()?;
    state.active_section.as_deref().and_then(Section::parse)
}

fn save_to(path: &Path, section: Section) {
    let state = UiState {
        active_section: Some(section.id().to_string()),
    };
    let result = (|| -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&state).map_err(std::io::Error::other)?;
        fs::write(path, json)
    })();
    if let Err(error) = result {
        tracing::warn!(%error, path = %path.display(), "failed to persist UI state");
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pulse").join(UI_STATE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_trips_a_section() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("ui_state.json");

        save_to(&path, Section::Teams);
        assert_eq!(load_from(&path), Some(Section::Teams));
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        assert_eq!(load_from(&dir.path().join("absent.json")), None);
    }

    #[test]
    fn unknown_persisted_id_is_dropped() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("ui_state.json");
        fs::write(&path, r#"{"active_section": "retired-section"}"#).expect("write");
        assert_eq!(load_from(&path), None);
    }

    #[test]
    fn corrupt_file_is_ignored() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("ui_state.json");
        fs::write(&path, "not json").expect("write");
        assert_eq!(load_from(&path), None);
    }
}
