use serde::{Deserialize, Serialize};

/// Title fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Upper bound on fetches in flight across the whole process (default: 1000)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Wall-clock limit for one fetch, in seconds (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Redirect hops followed before giving up (default: 5)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_max_concurrency() -> usize {
    1000
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    concat!("strainer/", env!("CARGO_PKG_VERSION")).into()
}

fn default_max_redirects() -> usize {
    5
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
        }
    }
}
