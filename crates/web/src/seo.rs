//! Canonical URL and hreflang alternates for a page.

use serde::Serialize;

use crate::i18n::Locale;
use crate::routing::normalize_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    pub canonical_url: String,
    pub alternates: Vec<Alternate>,
}

/// `base_url` + path without a trailing slash (root keeps its `/`).
pub fn canonical_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), normalize_path(path))
}

impl SeoMeta {
    /// Language is switched client-side, so every alternate points at the canonical URL.
    pub fn for_path(base_url: &str, path: &str) -> Self {
        let canonical_url = canonical_url(base_url, path);
        let alternates = Locale::ALL
            .iter()
            .map(|l| l.tag())
            .chain(std::iter::once("x-default"))
            .map(|hreflang| Alternate {
                hreflang: hreflang.to_string(),
                href: canonical_url.clone(),
            })
            .collect();
        Self {
            canonical_url,
            alternates,
        }
    }
}
