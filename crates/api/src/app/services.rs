use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use biosite_calculator::RecommendationEngine;
use biosite_catalog::{CatalogError, PriceCatalog};
use biosite_web::{ContentError, DownloadsList, Locale, PageRouter, Translations};

use crate::config::SiteConfig;
use crate::forwarder::{ForwardError, LeadForwarder};

/// Everything the handlers share. Built once, read-only afterwards.
#[derive(Debug)]
pub struct AppServices {
    pub engine: RecommendationEngine,
    pub translations: Arc<Translations>,
    pub pages: PageRouter,
    pub downloads: DownloadsList,
    pub images_dir: PathBuf,
    pub forwarder: LeadForwarder,
    pub site_url: String,
    pub default_locale: Locale,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("price catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("translations: {0}")]
    Translations(#[from] serde_json::Error),

    #[error("site content: {0}")]
    Content(#[from] ContentError),

    #[error("lead forwarder: {0}")]
    Forwarder(#[from] ForwardError),
}

pub fn build_services(config: &SiteConfig) -> Result<AppServices, StartupError> {
    let catalog = match &config.catalog_path {
        Some(path) => PriceCatalog::from_path(path)?,
        None => PriceCatalog::builtin()?,
    };
    tracing::info!(
        lines = catalog.lines().count(),
        source = config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string()),
        "price catalog loaded"
    );

    let downloads = DownloadsList::from_path(config.downloads_path())?;
    tracing::info!(count = downloads.items().len(), "downloads list loaded");

    let forwarder = LeadForwarder::new(config.lead_form_url.clone())?;
    tracing::info!(forwarding = forwarder.endpoint().is_some(), "lead forwarder ready");

    Ok(AppServices {
        engine: RecommendationEngine::new(catalog),
        translations: Arc::new(Translations::builtin()?),
        pages: PageRouter::default(),
        downloads,
        images_dir: config.images_dir(),
        forwarder,
        site_url: config.site_url.clone(),
        default_locale: config.default_locale,
    })
}
