use anyhow::Context as _;

use pulse_api::ApiClient;
use pulse_auth::{SessionArtifact, SessionStore};
use pulse_config::PulseConfig;

use crate::ui;

/// Everything a command handler needs: the API client for data loads and
/// the session store built over it. Constructed once per invocation and
/// passed down explicitly — no global session.
pub struct AppContext {
    pub api: ApiClient,
    pub store: SessionStore<ApiClient>,
}

impl AppContext {
    /// Load configuration (with its local fallback) and wire up the client
    /// and session store.
    pub fn init() -> anyhow::Result<Self> {
        let config = PulseConfig::load_or_default();
        tracing::debug!(api_url = %config.api_url, "using API base URL");

        let api = ApiClient::new(&config).context("failed to initialize API client")?;
        let store = SessionStore::new(api.clone(), SessionArtifact::at_default_location());
        Ok(Self { api, store })
    }

    /// Boot the session: silent auto-login behind the initialization gate.
    ///
    /// Every command starts here — no route decision is made before the
    /// first auto-login attempt resolves. Failure is invisible; the user
    /// simply ends up anonymous.
    pub async fn boot(&self) -> pulse_auth::SessionState {
        let spinner = ui::Progress::spinner("Initializing...");
        self.store.auto_login().await;
        spinner.finish();
        self.store.snapshot()
    }
}
