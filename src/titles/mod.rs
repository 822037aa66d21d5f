//! Title resolution: fetch each linked page once and remember its `<title>`.

pub mod cache;
pub mod fetcher;
pub mod html;
pub mod source;

pub use cache::{TitleCache, TitleStore};
pub use fetcher::TitleFetcher;
pub use html::extract_title;
pub use source::{HttpPageSource, Page, PageSource};
