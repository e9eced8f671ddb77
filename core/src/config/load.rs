use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Default todocap data directory: ~/.todocap (or `TODOCAP_DATA_DIR`).
pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var("TODOCAP_DATA_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".todocap"))
}

fn global_config_path() -> anyhow::Result<PathBuf> {
    Ok(get_data_dir()?.join("config.toml"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    let mut cfg = load_from(&global_config_path()?, Path::new("config.toml"))?;
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

/// Loads config with the local file taking precedence over the user-wide
/// one, falling back to defaults when neither exists.
pub fn load_from(global: &Path, local: &Path) -> anyhow::Result<AppConfig> {
    let cfg: AppConfig = if local.exists() {
        let s = std::fs::read_to_string(local)?;
        toml::from_str::<AppConfig>(&s)?
    } else if global.exists() {
        let s = std::fs::read_to_string(global)?;
        toml::from_str::<AppConfig>(&s)?
    } else {
        AppConfig::default()
    };
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(v) = std::env::var("TODOCAP_BASE_URL") {
        if !v.trim().is_empty() {
            cfg.gateway.base_url = v;
        }
    }
    if let Ok(v) = std::env::var("TODOCAP_PROJECT_ID") {
        if !v.trim().is_empty() {
            cfg.project_id = Some(v);
        }
    }
}

/// Remembers a chosen project id in the config file at `path`, leaving any
/// existing keys alone.
pub fn bind_project_id_at(path: &Path, project_id: &str) -> anyhow::Result<()> {
    let mut doc: toml::Value = if path.exists() {
        let s = std::fs::read_to_string(path)?;
        toml::from_str(&s)?
    } else {
        toml::Value::Table(toml::map::Map::new())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| anyhow::anyhow!("config file root is not a table: {}", path.display()))?;
    table.insert(
        "project_id".to_string(),
        toml::Value::String(project_id.to_string()),
    );

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, toml::to_string_pretty(&doc)?)?;
    tracing::debug!(
        target: "todocap.config",
        stage = "project.bind",
        path = %path.display(),
        project_id = %project_id
    );
    Ok(())
}
