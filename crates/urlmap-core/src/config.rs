use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::source::Format;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "URLMAP_CONFIG";

/// A user-defined profile backed by a definition file (optional `[[profiles]]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Name used with `--profile`. Reusing a built-in name replaces the built-in.
    pub name: String,
    /// Definition file; relative paths are taken from the config file's directory.
    pub path: PathBuf,
    /// Definition format; guessed from the file extension when missing.
    #[serde(default)]
    pub format: Option<Format>,
}

/// Global configuration loaded from `~/.config/urlmap/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlmapConfig {
    /// Profile used when a command is not given `--profile`.
    pub default_profile: String,
    /// Extra profiles loaded from definition files.
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

impl Default for UrlmapConfig {
    fn default() -> Self {
        Self {
            default_profile: "gtk4".to_string(),
            profiles: Vec::new(),
        }
    }
}

/// Config file location: `$URLMAP_CONFIG` if set, else the XDG config dir.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlmapConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Load configuration from `path`, creating a default file there if it is missing.
pub fn load_or_init_at(path: &Path) -> Result<UrlmapConfig> {
    if !path.exists() {
        let default_cfg = UrlmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from an existing file.
pub fn load_from(path: &Path) -> Result<UrlmapConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: UrlmapConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
