//! Dashboard settings file.
//!
//! A single flat TOML table. Every key is optional; a missing file means
//! defaults. Command-line flags are applied on top in `main`.
//!
//! ```toml
//! layout = "compact"
//! top_k = 5
//! catalog = "/home/me/music/tamil"
//! volume = 0.6
//! shuffle_seed = 42
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::snapshot::DisplayLimits;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which dashboard to draw. Also picks the display limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Desktop,
    Compact,
}

impl Layout {
    pub fn limits(self) -> DisplayLimits {
        match self {
            Layout::Desktop => DisplayLimits::DESKTOP,
            Layout::Compact => DisplayLimits::COMPACT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub layout: Layout,
    /// Overrides the layout's ranked-table length.
    pub top_k: Option<usize>,
    /// TOML catalog file or a folder of tagged MP3s. Built-in catalog if unset.
    pub catalog: Option<PathBuf>,
    pub volume: f32,
    /// Shuffle starts on with this seed.
    pub shuffle_seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Desktop,
            top_k: None,
            catalog: None,
            volume: 0.8,
            shuffle_seed: None,
        }
    }
}

impl DashboardConfig {
    /// Read `path`. A file that doesn't exist is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.volume = config.volume.clamp(0.0, 1.0);
        Ok(config)
    }

    /// `<platform config dir>/thedal/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "thedal").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn limits(&self) -> DisplayLimits {
        let mut limits = self.layout.limits();
        if let Some(k) = self.top_k {
            limits.top_k = k.max(1);
        }
        limits
    }
}
