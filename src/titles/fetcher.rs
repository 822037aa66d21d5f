use super::cache::{TitleCache, TitleStore};
use super::html::extract_title;
use super::source::{HttpPageSource, PageSource};
use crate::config::FetcherConfig;
use crate::error::FetchError;
use anyhow::Result;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Resolves URLs to page titles through a bounded pool of in-flight fetches.
///
/// One fetcher is shared by every request in the process: the semaphore caps
/// outbound fan-out across all of them, and the store remembers every title
/// that was actually found.
#[derive(Clone)]
pub struct TitleFetcher {
    store: Arc<dyn TitleStore>,
    source: Arc<dyn PageSource>,
    pool: Arc<Semaphore>,
    timeout: Duration,
}

impl TitleFetcher {
    pub fn new(
        store: Arc<dyn TitleStore>,
        source: Arc<dyn PageSource>,
        max_concurrency: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            source,
            pool: Arc::new(Semaphore::new(max_concurrency)),
            timeout,
        }
    }

    /// Fetcher with an in-memory cache and a real HTTP client.
    pub fn from_config(config: &FetcherConfig) -> crate::error::Result<Self> {
        let source = HttpPageSource::new(config)?;
        Ok(Self::new(
            Arc::new(TitleCache::new()),
            Arc::new(source),
            config.max_concurrency,
            Duration::from_secs(config.timeout_secs),
        ))
    }

    pub fn store(&self) -> &Arc<dyn TitleStore> {
        &self.store
    }

    /// Fetch slots currently free in the pool.
    pub fn available_slots(&self) -> usize {
        self.pool.available_permits()
    }

    /// Resolve every URL to a title.
    ///
    /// The result is index-aligned with `urls` whatever order the fetches
    /// finish in. A URL that can't be resolved yields `""`; nothing here
    /// fails the batch.
    pub async fn fetch_titles(&self, urls: &[String]) -> Vec<String> {
        let handles: Vec<_> = urls
            .iter()
            .map(|url| {
                let fetcher = self.clone();
                let url = url.clone();
                tokio::spawn(async move { fetcher.fetch_title(&url).await })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(urls)
            .map(|(joined, url)| {
                joined.unwrap_or_else(|e| {
                    tracing::warn!(url = %url, error = %e, "title fetch task failed");
                    String::new()
                })
            })
            .collect()
    }

    /// Resolve one URL, consulting the store first.
    pub async fn fetch_title(&self, url: &str) -> String {
        if let Some(title) = self.store.get(url) {
            tracing::debug!(url, "title cache hit");
            return title;
        }

        let Ok(_permit) = self.pool.acquire().await else {
            tracing::warn!(url, "title fetch pool closed");
            return String::new();
        };

        match self.resolve(url).await {
            Ok(title) => {
                tracing::debug!(url, store = self.store.name(), "caching title");
                if let Err(e) = self.store.set(url, &title, true) {
                    tracing::warn!(url, error = %e, "failed to cache title");
                }
                title
            }
            Err(e) => {
                tracing::debug!(url, source = self.source.name(), error = %e, "title unresolved");
                String::new()
            }
        }
    }

    /// Fetch and parse without touching the store. `Ok` only when a 200
    /// response carried a title element, possibly an empty one.
    async fn resolve(&self, url: &str) -> Result<String, FetchError> {
        let page = tokio::time::timeout(self.timeout, self.source.get(url))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        if !page.is_ok() {
            return Err(FetchError::Status(page.status));
        }

        extract_title(&page.body).ok_or(FetchError::NoTitle)
    }
}
