use std::time::Duration;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `Strainer`.
///
/// Returned by config loading and by the fallible constructors
/// (`Strainer::from_config`, `TitleFetcher::from_config`). Extraction is total
/// and title resolution folds every failure into an empty title, so none of
/// these reach an HTTP caller. The binary wraps them in `anyhow`.
#[derive(Debug, Error)]
pub enum StrainerError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Title cache ─────────────────────────────────────────────────────
    #[error("cache: {0}")]
    Cache(#[from] CacheError),

    // ── Title fetch ─────────────────────────────────────────────────────
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Cache errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },
}

// ─── Fetch errors ────────────────────────────────────────────────────────────

/// Reasons a single URL could not be resolved to a title.
///
/// These stay inside the fetch task: they are logged and the URL's title
/// degrades to an empty string.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("unreadable body: {0}")]
    Body(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("no title element")]
    NoTitle,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, StrainerError>;
