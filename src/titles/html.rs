use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector parses"));

/// Text of the document's first `<title>` element, exactly as written.
///
/// `Some("")` for a present-but-empty title; `None` when the document has no
/// title element at all.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>())
}
