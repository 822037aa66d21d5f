use super::super::{FetcherConfig, GatewayConfig, ObservabilityConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub fetcher: FetcherConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetcher.max_concurrency == 0 {
            return Err(ConfigError::Validation(
                "fetcher.max_concurrency must be at least 1".into(),
            ));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetcher.timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
