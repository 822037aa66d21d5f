#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod response;
pub mod service;
pub mod titles;

pub use config::Config;
pub use error::{CacheError, ConfigError, FetchError, StrainerError};
pub use response::{Link, StrainResponse};
pub use service::Strainer;
