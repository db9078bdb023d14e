//! Downloadable documents listed in the downloads grid.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadItem {
    pub title: String,
    pub file: String,
    /// `EE` or `EN`.
    pub lang: String,
    #[serde(rename = "sizeKB")]
    pub size_kb: u64,
}

impl DownloadItem {
    /// Public URL of the document.
    pub fn href(&self) -> String {
        format!("/downloads/{}", self.file)
    }
}

#[derive(Debug, Deserialize)]
struct RawItem {
    file: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    lang: Option<String>,
    #[serde(default, rename = "sizeKB")]
    size_kb: u64,
}

impl From<RawItem> for DownloadItem {
    fn from(raw: RawItem) -> Self {
        let title = raw
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| title_from_file(&raw.file));
        let lang = raw
            .lang
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| guess_lang(&raw.file).to_string());
        Self {
            title,
            file: raw.file,
            lang,
            size_kb: raw.size_kb,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DownloadsList {
    items: Vec<DownloadItem>,
}

impl DownloadsList {
    /// Load `downloads.json`; a missing file is an empty list.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ContentError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json_str(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<RawItem> = serde_json::from_str(json)?;
        Ok(Self {
            items: raw.into_iter().map(DownloadItem::from).collect(),
        })
    }

    pub fn items(&self) -> &[DownloadItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `"biodisc_manual-EN.pdf"` -> `"Biodisc Manual EN"`.
pub fn title_from_file(file: &str) -> String {
    let stem = match file.rfind('.') {
        Some(idx) if idx > 0 => &file[..idx],
        _ => file,
    };
    stem.split(['_', '-'])
        .flat_map(str::split_whitespace)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Estonian documents carry `_ee`, `(est)` or `est` in their name.
pub fn guess_lang(file: &str) -> &'static str {
    let f = file.to_lowercase();
    if f.contains("_ee") || f.contains("(est)") || f.contains("est") {
        "EE"
    } else {
        "EN"
    }
}
