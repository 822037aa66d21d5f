pub mod schema;

pub use schema::{Config, FetcherConfig, GatewayConfig, ObservabilityConfig};
