use crate::hmmer::scanner::DEFAULT_HMMSCAN;
use crate::summary::DEFAULT_EVALUE_THRESHOLD;
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_evalue_threshold")]
    pub evalue_threshold: f64,
    #[serde(default = "default_hmmscan")]
    pub hmmscan: String,
}

fn default_evalue_threshold() -> f64 {
    DEFAULT_EVALUE_THRESHOLD
}

fn default_hmmscan() -> String {
    DEFAULT_HMMSCAN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            evalue_threshold: default_evalue_threshold(),
            hmmscan: default_hmmscan(),
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "t3ss", "t3ss-scan")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when it is absent or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::path() {
            if config_path.exists() {
                debug!("Loading config from {}", config_path.display());
                match fs::read_to_string(&config_path)
                    .map_err(|e| e.to_string())
                    .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()))
                {
                    Ok(config) => return config,
                    Err(e) => warn!("Ignoring config {}: {}", config_path.display(), e),
                }
            }
        }
        Config::default()
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
