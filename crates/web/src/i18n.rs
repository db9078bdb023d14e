//! Locales and dot-keyed translation tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const EN_STRINGS: &str = include_str!("../locales/en.json");
const ET_STRINGS: &str = include_str!("../locales/et.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Et,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Et, Locale::En];

    /// BCP 47 tag, also used for `hreflang`.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Et => "et",
            Locale::En => "en",
        }
    }

    /// Parse a tag such as `en`, `en-GB` or `ET`.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Locale::ALL.into_iter().find(|l| l.tag() == primary)
    }

    /// Most preferred supported language in an `Accept-Language` header.
    ///
    /// Entries with `q=0` are not acceptable; equal weights keep header order.
    /// A malformed weight counts as `1`.
    pub fn from_accept_language(header: &str) -> Option<Locale> {
        let mut best: Option<(Locale, f32)> = None;
        for part in header.split(',') {
            let mut fields = part.split(';');
            let Some(locale) = fields.next().and_then(Locale::from_tag) else {
                continue;
            };
            let weight = fields
                .filter_map(|f| f.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if weight <= 0.0 {
                continue;
            }
            if best.is_none_or(|(_, w)| weight > w) {
                best = Some((locale, weight));
            }
        }
        best.map(|(locale, _)| locale)
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Flattened `"a.b.c" -> text` tables per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    tables: HashMap<Locale, HashMap<String, String>>,
    fallback: Locale,
}

impl Translations {
    /// Tables compiled into the crate.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        let mut translations = Self::empty(Locale::default());
        translations.insert_json(Locale::En, EN_STRINGS)?;
        translations.insert_json(Locale::Et, ET_STRINGS)?;
        Ok(translations)
    }

    pub fn empty(fallback: Locale) -> Self {
        Self {
            tables: HashMap::new(),
            fallback,
        }
    }

    /// Load a nested JSON object for `locale`, replacing any previous table.
    pub fn insert_json(&mut self, locale: Locale, json: &str) -> Result<(), serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let mut table = HashMap::new();
        flatten(&value, String::new(), &mut table);
        self.tables.insert(locale, table);
        Ok(())
    }

    /// Exact lookup without fallback.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables.get(&locale)?.get(key).map(String::as_str)
    }

    /// Lookup in `locale`, then the fallback locale, then the key itself.
    pub fn lookup<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.get(locale, key)
            .or_else(|| self.get(self.fallback, key))
            .unwrap_or(key)
    }

    pub fn fallback(&self) -> Locale {
        self.fallback
    }
}

fn flatten(value: &serde_json::Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(v, key, out);
            }
        }
        serde_json::Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        serde_json::Value::Null => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}
