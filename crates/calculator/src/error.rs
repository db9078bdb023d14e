use biosite_catalog::ProductLine;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The catalog has no entries for the line a rule selected.
    #[error("no catalog entries for product line {0}")]
    MissingProductLine(ProductLine),

    /// No rule in the table applied (only possible with a custom table).
    #[error("no recommendation rule applies")]
    NoRuleMatched,
}
