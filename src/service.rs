use crate::config::FetcherConfig;
use crate::error::Result;
use crate::extract::{extract_emoticons, extract_mentions, extract_urls};
use crate::response::StrainResponse;
use crate::titles::{TitleFetcher, TitleStore};
use std::sync::Arc;

/// Message strainer: extraction plus title resolution behind one handle.
///
/// Construct once per process and share it; the fetch pool and title cache
/// inside are meant to be common to every caller.
#[derive(Clone)]
pub struct Strainer {
    fetcher: TitleFetcher,
}

impl Strainer {
    pub fn new(fetcher: TitleFetcher) -> Self {
        Self { fetcher }
    }

    pub fn from_config(config: &FetcherConfig) -> Result<Self> {
        Ok(Self::new(TitleFetcher::from_config(config)?))
    }

    pub fn fetcher(&self) -> &TitleFetcher {
        &self.fetcher
    }

    pub fn cache(&self) -> &Arc<dyn TitleStore> {
        self.fetcher.store()
    }

    /// Extract mentions, emoticons and links from `message`, resolving a
    /// title for every link. Never fails.
    pub async fn strain(&self, message: &str) -> StrainResponse {
        let mentions = extract_mentions(message);
        let emoticons = extract_emoticons(message);
        let urls = extract_urls(message);

        let titles = if urls.is_empty() {
            Vec::new()
        } else {
            self.fetcher.fetch_titles(&urls).await
        };

        tracing::debug!(
            mentions = mentions.len(),
            emoticons = emoticons.len(),
            links = urls.len(),
            "strained message"
        );

        StrainResponse::assemble(mentions, emoticons, urls, titles)
    }
}
