pub mod detector;
mod patterns;

pub use detector::{extract_emoticons, extract_mentions, extract_urls};
