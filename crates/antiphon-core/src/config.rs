use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{Archive, DEFAULT_ARCHIVE_BASE_URL};

/// Optional settings read from `~/.config/antiphon/config.toml`.
///
/// The file is never required and never created; a missing file or missing
/// keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntiphonConfig {
    /// Scheme and host of the chant archive, without a trailing path.
    pub archive_base_url: String,
    /// Seconds to wait for the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole GET, body included.
    pub timeout_secs: u64,
    /// Optional User-Agent header; libcurl sends none when unset.
    pub user_agent: Option<String>,
}

impl Default for AntiphonConfig {
    fn default() -> Self {
        Self {
            archive_base_url: DEFAULT_ARCHIVE_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
            user_agent: None,
        }
    }
}

impl AntiphonConfig {
    pub fn archive(&self) -> Archive {
        Archive::new(&self.archive_base_url)
    }
}

/// Path of the config file if one exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("antiphon")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk, or defaults when no file is present.
pub fn load() -> Result<AntiphonConfig> {
    match config_path()? {
        Some(path) => load_from_path(&path),
        None => Ok(AntiphonConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<AntiphonConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AntiphonConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
