use std::path::{Path, PathBuf};

use super::types::AppConfig;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const UPSTREAM_URL_ENV: &str = "TASKGATE_UPSTREAM_URL";
pub const HTTP_HOST_ENV: &str = "TASKGATE_HTTP_HOST";
pub const HTTP_PORT_ENV: &str = "TASKGATE_HTTP_PORT";

/// Get the default taskgate data directory: ~/.taskgate
pub fn get_taskgate_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".taskgate"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.taskgate/config.toml (highest)
    let user_config = get_taskgate_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(cfg, |key| std::env::var(key).ok())
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("read {} failed: {}", path.display(), e))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("parse {} failed: {}", path.display(), e))?;
    Ok(cfg)
}

/// Environment variable overrides (Priority 0: highest). Blank values are ignored.
///
/// The lookup is injected so tests never touch the process environment.
pub fn apply_env_overrides<F>(mut cfg: AppConfig, lookup: F) -> anyhow::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(API_KEY_ENV) {
        cfg.upstream.api_key = v.trim().to_string();
    }
    if let Some(v) = get(UPSTREAM_URL_ENV) {
        cfg.upstream.base_url = v.trim().to_string();
    }
    if let Some(v) = get(HTTP_HOST_ENV) {
        cfg.http_server.host = v.trim().to_string();
    }
    if let Some(v) = get(HTTP_PORT_ENV) {
        cfg.http_server.port = v
            .trim()
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("{} must be a port number: {}", HTTP_PORT_ENV, e))?;
    }

    Ok(cfg)
}
