use super::Config;
use crate::error::{ConfigError, Result};
use anyhow::Context;
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.strainer/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        let strainer_dir = home.join(".strainer");
        let config_path = strainer_dir.join("config.toml");

        if !strainer_dir.exists() {
            fs::create_dir_all(&strainer_dir).map_err(ConfigError::from)?;
        }

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let mut config = Self {
                config_path,
                ..Self::default()
            };
            config.save()?;
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load an explicit config file, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let mut config: Config = toml::from_str(&contents).map_err(|e| {
            ConfigError::Load(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.config_path = path.to_path_buf();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).map_err(ConfigError::from)?;
        Ok(())
    }
}
