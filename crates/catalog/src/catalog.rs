use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use biosite_core::{DomainError, Money};

use crate::error::CatalogError;
use crate::product_line::ProductLine;

/// Price list compiled into the binary; used unless a dataset path is configured.
const BUILTIN_DATASET: &str = include_str!("../data/prices.json");

/// One purchasable product configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    product_line: ProductLine,
    model: String,
    material: String,
    max_flow: f64,
    population_equivalent: u32,
    inlet_height: String,
    dimensions: Option<String>,
    /// Rated power draw of this size, when it differs from the line's usual rating.
    power: Option<String>,
    /// Feature tags of this size; empty means the line's standard set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    features: Vec<String>,
    #[serde(rename = "priceExWorksCents")]
    price_ex_works: Option<Money>,
    #[serde(rename = "priceEndUserCents")]
    price_end_user: Option<Money>,
}

impl CatalogEntry {
    pub fn product_line(&self) -> ProductLine {
        self.product_line
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    /// Rated daily flow in litres.
    pub fn max_flow(&self) -> f64 {
        self.max_flow
    }

    pub fn population_equivalent(&self) -> u32 {
        self.population_equivalent
    }

    pub fn inlet_height(&self) -> &str {
        &self.inlet_height
    }

    pub fn dimensions(&self) -> Option<&str> {
        self.dimensions.as_deref()
    }

    pub fn power(&self) -> Option<&str> {
        self.power.as_deref()
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn price_ex_works(&self) -> Option<Money> {
        self.price_ex_works
    }

    pub fn price_end_user(&self) -> Option<Money> {
        self.price_end_user
    }
}

/// Row shape of the JSON dataset (euro decimals, camelCase keys).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    model: String,
    material: String,
    max_flow: f64,
    #[serde(alias = "populationEquivalent")]
    pe: u32,
    inlet_height: String,
    #[serde(default)]
    dimensions: Option<String>,
    #[serde(default)]
    power: Option<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    price_ex_works: Option<f64>,
    #[serde(default)]
    price_end_user: Option<f64>,
}

impl RawEntry {
    fn into_entry(self, line: ProductLine) -> Result<CatalogEntry, CatalogError> {
        let invalid = |model: &str, source: DomainError| CatalogError::InvalidEntry {
            line: line.key().to_string(),
            model: model.to_string(),
            source,
        };

        if self.model.trim().is_empty() {
            return Err(invalid(&self.model, DomainError::validation("model must not be empty")));
        }
        if self.pe == 0 {
            return Err(invalid(&self.model, DomainError::validation("pe must be positive")));
        }
        if !self.max_flow.is_finite() || self.max_flow < 0.0 {
            return Err(invalid(
                &self.model,
                DomainError::validation("maxFlow must be a non-negative number"),
            ));
        }

        if self.power.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(invalid(&self.model, DomainError::validation("power must not be blank")));
        }
        if self.features.iter().any(|f| f.trim().is_empty()) {
            return Err(invalid(&self.model, DomainError::validation("feature tags must not be blank")));
        }

        let price_ex_works = self
            .price_ex_works
            .map(Money::from_euros)
            .transpose()
            .map_err(|e| invalid(&self.model, e))?;
        let price_end_user = self
            .price_end_user
            .map(Money::from_euros)
            .transpose()
            .map_err(|e| invalid(&self.model, e))?;

        Ok(CatalogEntry {
            product_line: line,
            model: self.model,
            material: self.material,
            max_flow: self.max_flow,
            population_equivalent: self.pe,
            inlet_height: self.inlet_height,
            dimensions: self.dimensions,
            power: self.power,
            features: self.features,
            price_ex_works,
            price_end_user,
        })
    }
}

/// Immutable price catalog, grouped by product line.
///
/// Each line's entries are held in ascending population-equivalent order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceCatalog {
    lines: BTreeMap<ProductLine, Vec<CatalogEntry>>,
}

impl PriceCatalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a dataset keyed by lower-case product line.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<RawEntry>> = serde_json::from_str(json)?;

        let mut lines = BTreeMap::new();
        for (key, rows) in raw {
            let line: ProductLine = key.parse()?;

            let mut seen = HashSet::new();
            let mut entries = Vec::with_capacity(rows.len());
            for row in rows {
                if !seen.insert(row.model.clone()) {
                    return Err(CatalogError::InvalidEntry {
                        line: line.key().to_string(),
                        model: row.model,
                        source: DomainError::invariant("duplicate model within product line"),
                    });
                }
                entries.push(row.into_entry(line)?);
            }

            // Stable: rows sharing a PE keep dataset order.
            entries.sort_by_key(|e| e.population_equivalent);
            lines.insert(line, entries);
        }

        Ok(Self { lines })
    }

    /// Product lines present in the catalog.
    pub fn lines(&self) -> impl Iterator<Item = ProductLine> + '_ {
        self.lines.keys().copied()
    }

    /// Entries of a product line, ascending by PE. Empty if the line is absent.
    pub fn entries(&self, line: ProductLine) -> &[CatalogEntry] {
        self.lines.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Smallest entry whose PE covers `pe`; the line's largest entry when none does.
    ///
    /// `None` only when the line has no entries at all.
    pub fn entry_for(&self, line: ProductLine, pe: u32) -> Option<&CatalogEntry> {
        let entries = self.entries(line);
        entries
            .iter()
            .find(|e| e.population_equivalent >= pe)
            .or_else(|| entries.last())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.values().all(Vec::is_empty)
    }
}
