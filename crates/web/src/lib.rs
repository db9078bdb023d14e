//! Site model: routing, localisation, page documents and the static content
//! (downloads, image manifests, lead form) the pages are built from.
//!
//! Framework-free; `biosite-api` maps these onto HTTP.

pub mod context;
pub mod downloads;
pub mod error;
pub mod i18n;
pub mod images;
pub mod leads;
pub mod pages;
pub mod routing;
pub mod seo;
pub mod views;

pub use context::AppContext;
pub use downloads::{DownloadItem, DownloadsList};
pub use error::ContentError;
pub use i18n::{Locale, Translations};
pub use images::ImageManifest;
pub use leads::{LeadError, LeadForm, LeadOutcome, LeadSubmission};
pub use pages::PageDocument;
pub use routing::{Page, PageRouter};
pub use views::{LocalizedProduct, LocalizedRecommendation};
