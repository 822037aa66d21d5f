use regex::Regex;
use std::sync::LazyLock;

/// `@` followed by one or more word characters. Every `@` restarts matching,
/// so `@alice@bob` yields both names.
pub(super) static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)").expect("mention pattern compiles"));

/// One to fifteen word characters between a single pair of parentheses.
///
/// Tie-break is leftmost-innermost: a `(` that is followed by another `(`
/// cannot start a match, so the scan moves on to the inner one. `((success))`
/// therefore yields `success` once, never the outer span.
pub(super) static EMOTICON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\w{1,15})\)").expect("emoticon pattern compiles"));

/// Liberal "web URL" grammar restricted to `http://`, `https://` and `www.`
/// prefixes. Balanced parentheses may appear inside the URL, but the final
/// character can't be sentence punctuation or an unbalanced `)`.
const WEB_URL_PATTERN: &str = concat!(
    r"(?i)\b",
    r"(?:https?://|www\d{0,3}[.])",
    r"(?:[^\s()<>]+|\((?:[^\s()<>]+|\([^\s()<>]+\))*\))+",
    r"(?:\((?:[^\s()<>]+|\([^\s()<>]+\))*\)",
    r#"|[^\s`!()\[\]{};:'".,<>?«»“”‘’])"#,
);

pub(super) static WEB_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WEB_URL_PATTERN).expect("web url pattern compiles"));
