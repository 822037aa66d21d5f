use super::patterns::{EMOTICON, MENTION, WEB_URL};
use regex::Regex;

/// Detect `@mentions` in text. Returns names without the `@`, in order of
/// appearance, duplicates kept.
pub fn extract_mentions(message: &str) -> Vec<String> {
    first_groups(&MENTION, message)
}

/// Detect `(emoticon)` shortcodes in text. Returns the enclosed words without
/// parentheses, in order of appearance.
pub fn extract_emoticons(message: &str) -> Vec<String> {
    first_groups(&EMOTICON, message)
}

/// Detect web URLs in text. Returns each URL exactly as written, in order of
/// appearance and without deduplication.
pub fn extract_urls(message: &str) -> Vec<String> {
    WEB_URL
        .find_iter(message)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn first_groups(pattern: &Regex, message: &str) -> Vec<String> {
    pattern
        .captures_iter(message)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
