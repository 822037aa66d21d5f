mod core;
mod fetcher;
mod gateway;
mod observability;

pub use core::Config;
pub use fetcher::FetcherConfig;
pub use gateway::GatewayConfig;
pub use observability::ObservabilityConfig;
