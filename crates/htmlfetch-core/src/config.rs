use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/htmlfetch/config.toml`.
///
/// Every field is optional in the file; missing keys take the defaults below.
/// The URL, redirect policy and timeout are never configured here: those are
/// asked for on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Value of the `User-Agent` request header.
    pub user_agent: String,
    /// Maximum number of redirects followed when the user allows redirects.
    pub max_redirections: u32,
    /// Cap on the connect phase, in seconds. Never exceeds the prompted timeout.
    pub connect_timeout_secs: u64,
    /// Advertise gzip/deflate and let libcurl decode compressed bodies.
    pub accept_compressed: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("htmlfetch/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirections: 10,
            connect_timeout_secs: 10,
            accept_compressed: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("htmlfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path (`--config`). The file must exist.
pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
