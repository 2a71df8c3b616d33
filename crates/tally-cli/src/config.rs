//! TOML configuration.
//!
//! ```toml
//! [export]
//! dir = "/home/me/exports"
//!
//! [ui]
//! ascii = false
//! no_color = false
//!
//! [log]
//! level = "debug"
//! ```
//!
//! Every section and key is optional. A missing file is the same as an
//! empty one.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub export: ExportSection,
    pub ui: UiSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub ascii: bool,
    pub no_color: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: Option<String>,
}

/// Resolve the config path: explicit flag/env first, then the XDG default.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
        _ => default_config_path().ok(),
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<TallyConfig> {
    match path {
        Some(path) if path.exists() => read_config(path),
        _ => Ok(TallyConfig::default()),
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<TallyConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tally"));
        }
    }
    Ok(home_dir()?.join(".config").join("tally"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
