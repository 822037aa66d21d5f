use crate::config::FetcherConfig;
use crate::error::FetchError;
use anyhow::{Context, Result};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use url::Url;

/// A fetched document. `body` is only populated for `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP GET capability used by the title fetcher.
///
/// Implementations resolve one URL to a [`Page`] or a [`FetchError`]. The
/// fetcher applies its own wall-clock timeout around every call.
pub trait PageSource: Send + Sync {
    /// Human-readable source name (e.g. "http")
    fn name(&self) -> &str;

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Page, FetchError>> + Send + 'a>>;
}

/// [`PageSource`] backed by a shared `reqwest::Client`.
pub struct HttpPageSource {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPageSource {
    pub fn new(config: &FetcherConfig) -> crate::error::Result<Self> {
        install_crypto_provider();

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .context("build title fetch HTTP client")?;

        Ok(Self { client, timeout })
    }

    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let target = request_target(url)?;
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| self.classify(&e))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Ok(Page {
                status,
                body: String::new(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        Ok(Page {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    fn classify(&self, err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if err.is_builder() {
            FetchError::InvalidUrl(err.to_string())
        } else {
            FetchError::Connection(err.to_string())
        }
    }
}

impl PageSource for HttpPageSource {
    fn name(&self) -> &str {
        "http"
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Page, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch(url))
    }
}

/// URL actually requested for a message URL. Scheme-less `www.` links are
/// fetched over plain HTTP.
pub fn request_target(url: &str) -> Result<Url, FetchError> {
    let lower = url.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!("unsupported scheme {other}"))),
    }
}

/// Select ring as the process-level rustls provider. Later calls are no-ops.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
