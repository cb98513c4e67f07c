use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENGINE: &str = "docker";
pub const DEFAULT_NETWORK: &str = "gdock_backend";
pub const DEFAULT_IMAGE: &str = "node:20-bookworm-slim";

/// User settings read from `~/.lambda-run/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Container engine binary
    pub engine: String,
    /// Network the container is attached to
    pub network: String,
    /// Image used when the Dockerfile has no `FROM` line
    pub default_image: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.into(),
            network: DEFAULT_NETWORK.into(),
            default_image: DEFAULT_IMAGE.into(),
        }
    }
}

impl RunnerConfig {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = std::fs::read_to_string(path).unwrap_or_default();
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lambda-run")
            .join("config.toml")
    }
}
