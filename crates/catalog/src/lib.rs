//! Price catalog: the static table of purchasable treatment-system configurations.
//!
//! Pure data + lookup (no IO beyond reading a dataset the caller points at).

pub mod catalog;
pub mod error;
pub mod product_line;

pub use catalog::{CatalogEntry, PriceCatalog};
pub use error::CatalogError;
pub use product_line::ProductLine;
