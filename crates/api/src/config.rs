//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use biosite_web::Locale;

const DEFAULT_SITE_URL: &str = "https://kingspaneesti.com";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} is not a supported locale: {value}")]
    InvalidLocale { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// `BIOSITE_BIND`
    pub bind_addr: SocketAddr,
    /// `SITE_URL`: base of canonical URLs.
    pub site_url: String,
    /// `BIOSITE_CATALOG`: price list JSON; the built-in list when unset.
    pub catalog_path: Option<PathBuf>,
    /// `BIOSITE_PUBLIC_DIR`: holds `downloads.json` and `images/`.
    pub public_dir: PathBuf,
    /// `LEAD_FORM_URL`: form service endpoint leads are forwarded to.
    pub lead_form_url: Option<String>,
    /// `BIOSITE_DEFAULT_LOCALE`
    pub default_locale: Locale,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            site_url: DEFAULT_SITE_URL.to_string(),
            catalog_path: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            lead_form_url: None,
            default_locale: Locale::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(value) = get("BIOSITE_BIND") {
            config.bind_addr = value.parse().map_err(|_| ConfigError::InvalidBind {
                var: "BIOSITE_BIND",
                value: value.clone(),
            })?;
        }

        match get("SITE_URL") {
            Some(value) => {
                if !is_http_url(&value) {
                    return Err(ConfigError::InvalidUrl {
                        var: "SITE_URL",
                        value,
                    });
                }
                config.site_url = value.trim_end_matches('/').to_string();
            }
            None => tracing::warn!("SITE_URL not set; using {DEFAULT_SITE_URL}"),
        }

        config.catalog_path = get("BIOSITE_CATALOG").map(PathBuf::from);

        if let Some(value) = get("BIOSITE_PUBLIC_DIR") {
            config.public_dir = PathBuf::from(value);
        }

        match get("LEAD_FORM_URL") {
            Some(value) => {
                if !is_http_url(&value) {
                    return Err(ConfigError::InvalidUrl {
                        var: "LEAD_FORM_URL",
                        value,
                    });
                }
                config.lead_form_url = Some(value);
            }
            None => tracing::warn!("LEAD_FORM_URL not set; leads will only be logged"),
        }

        if let Some(value) = get("BIOSITE_DEFAULT_LOCALE") {
            config.default_locale =
                Locale::from_tag(&value).ok_or_else(|| ConfigError::InvalidLocale {
                    var: "BIOSITE_DEFAULT_LOCALE",
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    pub fn downloads_path(&self) -> PathBuf {
        self.public_dir.join("downloads.json")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.public_dir.join("images")
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.downloads_path(), PathBuf::from("public/downloads.json"));
        assert_eq!(config.images_dir(), PathBuf::from("public/images"));
    }

    #[test]
    fn reads_all_variables() {
        let config = from_pairs(&[
            ("BIOSITE_BIND", "127.0.0.1:3000"),
            ("SITE_URL", "https://example.ee/"),
            ("BIOSITE_CATALOG", "/etc/biosite/prices.json"),
            ("BIOSITE_PUBLIC_DIR", "/srv/public"),
            ("LEAD_FORM_URL", "https://forms.example.com/f/abc"),
            ("BIOSITE_DEFAULT_LOCALE", "en"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.site_url, "https://example.ee");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/biosite/prices.json")));
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
        assert_eq!(config.lead_form_url.as_deref(), Some("https://forms.example.com/f/abc"));
        assert_eq!(config.default_locale, Locale::En);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = from_pairs(&[("LEAD_FORM_URL", "  ")]).unwrap();
        assert_eq!(config.lead_form_url, None);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            from_pairs(&[("BIOSITE_BIND", "localhost")]),
            Err(ConfigError::InvalidBind { .. })
        ));
        assert!(matches!(
            from_pairs(&[("LEAD_FORM_URL", "ftp://x")]),
            Err(ConfigError::InvalidUrl { var: "LEAD_FORM_URL", .. })
        ));
        assert!(matches!(
            from_pairs(&[("BIOSITE_DEFAULT_LOCALE", "fi")]),
            Err(ConfigError::InvalidLocale { .. })
        ));
    }
}
