//! # pulse-config
//!
//! Layered configuration loading for Pulse using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PULSE_*` prefix)
//! 2. The runtime `config.json` document in the working directory
//! 3. User-level `~/.config/pulse/config.toml`
//! 4. Built-in defaults
//!
//! `config.json` is the deployment-time document the backend operators
//! ship next to the client; it exposes `API_URL` (honored verbatim via a
//! serde alias). When no source can be loaded the client falls back to the
//! local development defaults rather than failing.
//!
//! # Usage
//!
//! ```no_run
//! use pulse_config::PulseConfig;
//!
//! let config = PulseConfig::load_or_default();
//! println!("API base: {}", config.api_url);
//! ```

mod error;

pub use error::ConfigError;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Local development fallback, used when no configuration can be loaded.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PulseConfig {
    /// Base URL of the REST backend. `config.json` spells this `API_URL`.
    #[serde(default = "default_api_url", alias = "API_URL")]
    pub api_url: String,

    /// Per-request timeout in seconds. No retries are attempted anywhere;
    /// a timed-out call surfaces through the normal error path.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PulseConfig {
    /// Load configuration from all sources.
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if `.env`
    /// loading is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source exists but cannot be parsed or
    /// merged.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. Typical entry point
    /// for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source exists but cannot be parsed or
    /// merged.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Load configuration, falling back to the local development defaults
    /// when loading fails. The failure is logged, never surfaced — a
    /// missing or broken `config.json` must not keep the client from
    /// starting.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load_with_dotenv() {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "failed to load configuration; using local fallback");
                Self::default()
            }
        }
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: user-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: the runtime config.json document
        let runtime_doc = PathBuf::from("config.json");
        if runtime_doc.exists() {
            figment = figment.merge(Json::file(runtime_doc));
        }

        // Layer 3: environment variables (highest priority)
        figment.merge(Env::prefixed("PULSE_"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pulse").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_local_development() {
        let config = PulseConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn runtime_document_api_url_key_is_honored() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.json", r#"{"API_URL": "https://api.example.com/api"}"#)?;
            let config: PulseConfig = PulseConfig::figment().extract()?;
            assert_eq!(config.api_url, "https://api.example.com/api");
            assert_eq!(config.timeout_secs, 10);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_runtime_document() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.json", r#"{"API_URL": "https://api.example.com/api"}"#)?;
            jail.set_env("PULSE_API_URL", "https://staging.example.com/api");
            let config: PulseConfig = PulseConfig::figment().extract()?;
            assert_eq!(config.api_url, "https://staging.example.com/api");
            Ok(())
        });
    }

    #[test]
    fn figment_builds_without_any_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PulseConfig = PulseConfig::figment().extract()?;
            assert_eq!(config.api_url, DEFAULT_API_URL);
            Ok(())
        });
    }
}
