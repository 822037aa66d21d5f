use super::Config;
use crate::config::schema::observability::parse_level;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port_str) =
            std::env::var("STRAINER_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) = std::env::var("STRAINER_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(secs_str) = std::env::var("STRAINER_FETCH_TIMEOUT_SECS")
            && let Ok(secs) = secs_str.parse::<u64>()
            && secs > 0
        {
            self.fetcher.timeout_secs = secs;
        }

        if let Ok(max_str) = std::env::var("STRAINER_MAX_CONCURRENCY")
            && let Ok(max) = max_str.parse::<usize>()
            && max > 0
        {
            self.fetcher.max_concurrency = max;
        }

        if let Ok(level) = std::env::var("STRAINER_LOG_LEVEL")
            && parse_level(&level).is_some()
        {
            self.observability.log_level = level;
        }
    }
}
