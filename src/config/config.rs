use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, EXPORT_DIR_ENV};
use crate::error::{SmelError, SmelResult};

/// User settings. Only describes where exports land; events and
/// enrollments are never written here.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub export_dir: Option<String>,
}

pub fn config_path() -> SmelResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| SmelError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    }
}

/// Missing or unreadable files fall back to the defaults.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    fs::read_to_string(path)
        .ok()
        .and_then(|config_str| serde_json::from_str(&config_str).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> SmelResult<()> {
    let path = config_path()?;
    save_config_to(&path, config)
}

pub fn save_config_to(path: &Path, config: &Config) -> SmelResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// Export directory with the environment variable taking precedence over
/// the config file.
pub fn get_export_dir() -> PathBuf {
    resolve_export_dir(env::var(EXPORT_DIR_ENV).ok(), &load_config())
}

pub fn resolve_export_dir(env_value: Option<String>, config: &Config) -> PathBuf {
    if let Some(dir) = env_value.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(dir) = config.export_dir.as_ref().filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
