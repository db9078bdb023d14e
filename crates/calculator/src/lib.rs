//! Sizing calculator: household parameters to a recommended treatment system.
//!
//! Implemented purely as deterministic logic over an immutable [`PriceCatalog`]
//! (no IO, no HTTP, no logging). Labels are returned as translation keys; the
//! presentation layer resolves them in the visitor's locale.
//!
//! [`PriceCatalog`]: biosite_catalog::PriceCatalog

pub mod engine;
pub mod error;
pub mod input;
pub mod pe;
pub mod resolver;

pub use engine::{Pick, Recommendation, RecommendationEngine, Rule, default_rules};
pub use error::RecommendError;
pub use input::{GroundwaterLevel, HouseholdInput, PropertyType};
pub use pe::{REFERENCE_USAGE_LITRES, compute_pe};
pub use resolver::{DefaultPower, PowerDraw, Pricing, ProductDetail, ProductProfile, resolve_product};
