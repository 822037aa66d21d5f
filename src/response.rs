use serde::{Deserialize, Serialize};

/// A URL found in the message together with its resolved title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: String,
}

/// Everything extracted from one chat message. Empty categories are left
/// out of the serialized JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrainResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emoticons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl StrainResponse {
    /// Pair `urls` with `titles` by position.
    ///
    /// `titles` comes from the fetcher and has the same length as `urls`; a
    /// missing trailing title is treated as unresolved.
    pub fn assemble(
        mentions: Vec<String>,
        emoticons: Vec<String>,
        urls: Vec<String>,
        titles: Vec<String>,
    ) -> Self {
        let mut titles = titles.into_iter();
        let links = urls
            .into_iter()
            .map(|url| Link {
                url,
                title: titles.next().unwrap_or_default(),
            })
            .collect();

        Self {
            mentions,
            emoticons,
            links,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty() && self.emoticons.is_empty() && self.links.is_empty()
    }
}
