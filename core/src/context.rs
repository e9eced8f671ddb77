use std::path::{Path, PathBuf};

use crate::config::{AppConfig, Scope};
use crate::error::CliError;
use crate::gateway::GatewayClient;
use crate::secrets::TokenStore;

/// Per-invocation application context: configuration plus the token store.
/// Passed explicitly everywhere; there is no global client state.
#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    data_dir: PathBuf,
    tokens: TokenStore,
}

impl AppContext {
    pub fn new(cfg: AppConfig, data_dir: PathBuf) -> Self {
        let tokens = TokenStore::new(&data_dir);
        Self {
            cfg,
            data_dir,
            tokens,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Token from the environment (`TODOCAP_API_TOKEN`) or the store.
    /// The environment wins and is never written back.
    pub fn stored_token(&self) -> Option<String> {
        if let Ok(v) = std::env::var("TODOCAP_API_TOKEN") {
            let v = v.trim().to_string();
            if !v.is_empty() {
                return Some(v);
            }
        }
        self.tokens.load()
    }

    /// Persists the chosen project id: `./config.toml` under project scope,
    /// the data-dir config under global scope.
    pub fn bind_project_id(&self, scope: Scope, project_id: &str) -> anyhow::Result<()> {
        let path = match scope {
            Scope::Project => std::path::PathBuf::from("config.toml"),
            Scope::Global => self.data_dir.join("config.toml"),
        };
        crate::config::bind_project_id_at(&path, project_id)
    }

    pub fn gateway(&self, token: &str) -> Result<GatewayClient, CliError> {
        GatewayClient::new(
            &self.cfg.gateway.base_url,
            token.to_string(),
            self.cfg.gateway.timeout_ms,
        )
        .map_err(CliError::Anyhow)
    }
}
