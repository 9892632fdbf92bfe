use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use campus_client::config::DEFAULT_SERVER_URL;

/// Persisted CLI configuration, stored next to the session files under
/// `~/.campus/`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub server_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn campus_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".campus"))
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::campus_dir()?.join("config.yaml"))
    }

    /// Precedence: `--server` flag, `CAMPUS_SERVER_URL`, config file,
    /// built-in default.
    pub fn resolve_server_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| std::env::var("CAMPUS_SERVER_URL").ok())
            .or_else(|| self.server_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config.server_url, None);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            server_url: Some("http://campus.example:9000".to_string()),
        };
        config.save_to(&path).unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(
            reloaded.server_url.as_deref(),
            Some("http://campus.example:9000")
        );
    }

    #[test]
    fn flag_wins_over_file() {
        let config = Config {
            server_url: Some("http://from-file".to_string()),
        };
        assert_eq!(
            config.resolve_server_url(Some("http://from-flag".to_string())),
            "http://from-flag"
        );
    }
}
