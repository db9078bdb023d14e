//! `biosite-core`: shared building blocks for the site crates.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::LeadId;
pub use money::{Money, VAT_RATE_PERCENT};
