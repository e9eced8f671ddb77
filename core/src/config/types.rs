use serde::{Deserialize, Serialize};

/// Where a chosen project id gets remembered: beside the current directory
/// or in the user-wide config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Project,
    Global,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bound remote project. Unset until the user picks or creates one.
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            gateway: GatewayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// URI scheme of the companion desktop app ("open in app" links).
    #[serde(default = "default_app_scheme")]
    pub app_scheme: String,

    /// URI scheme used for deep links back into the editor.
    #[serde(default = "default_editor_scheme")]
    pub editor_scheme: String,
}

fn default_base_url() -> String {
    "https://api.todoist.com".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_app_scheme() -> String {
    "todoist".to_string()
}

fn default_editor_scheme() -> String {
    "vscode".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            app_scheme: default_app_scheme(),
            editor_scheme: default_editor_scheme(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or the data dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "todocap_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}
