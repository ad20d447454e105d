use crate::config::Config;
use anyhow::{anyhow, Result};
use dietdesk_api::ApiClient;
use dietdesk_core::TokenStore;
use dietdesk_engine::{RouteDecision, SessionGuard};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    pub fn token_store(&self) -> TokenStore {
        TokenStore::new(&self.data_dir)
    }

    pub fn guard(&self) -> SessionGuard {
        SessionGuard::new(self.token_store())
    }

    pub fn api_client(&self) -> Result<Arc<ApiClient>> {
        let config = self.config()?;
        let base_url = config.api.base_url.clone().ok_or_else(|| {
            anyhow!("No service configured. Run 'dietdesk init --base-url <url>' first.")
        })?;
        let timeout = Duration::from_secs(config.api.timeout_secs);
        Ok(Arc::new(ApiClient::new(base_url, timeout)?))
    }

    /// Login-route analog: protected commands call this first and are
    /// sent to login instead of running.
    pub fn require_session(&self) -> Result<()> {
        match self.guard().evaluate() {
            RouteDecision::Allow => Ok(()),
            RouteDecision::RedirectToLogin => Err(anyhow!(
                "Not signed in. Run 'dietdesk session login --token <token>' first."
            )),
        }
    }
}
