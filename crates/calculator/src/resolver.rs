//! Catalog row + product-line profile -> descriptive, priced product record.

use serde::Serialize;

use biosite_catalog::{CatalogEntry, PriceCatalog, ProductLine};
use biosite_core::Money;

const FEATURE_KEY_PREFIX: &str = "calculator.features.";

/// Power draw shown for a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PowerDraw {
    Rated(String),
    /// Gravity-fed; needs no electricity.
    NotRequired,
    /// Depends on the installation; quoted per project.
    OnRequest,
}

/// Line-wide fallback power rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPower {
    Rated(&'static str),
    NotRequired,
    OnRequest,
}

impl DefaultPower {
    fn to_power_draw(self) -> PowerDraw {
        match self {
            DefaultPower::Rated(kw) => PowerDraw::Rated(kw.to_string()),
            DefaultPower::NotRequired => PowerDraw::NotRequired,
            DefaultPower::OnRequest => PowerDraw::OnRequest,
        }
    }
}

/// Per-line descriptive defaults. Catalog rows override power and features per size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductProfile {
    pub description_key: &'static str,
    pub power: DefaultPower,
    pub feature_keys: &'static [&'static str],
}

impl ProductProfile {
    pub fn for_line(line: ProductLine) -> ProductProfile {
        match line {
            ProductLine::BioDisc => ProductProfile {
                description_key: "calculator.systems.biodisc.desc",
                power: DefaultPower::Rated("0.37 kW"),
                feature_keys: &[
                    "calculator.features.quiet",
                    "calculator.features.odourFree",
                    "calculator.features.lowMaintenance",
                ],
            },
            ProductLine::BioFicient => ProductProfile {
                description_key: "calculator.systems.bioficient.desc",
                power: DefaultPower::Rated("0.55 kW"),
                feature_keys: &[
                    "calculator.features.energyEfficient",
                    "calculator.features.automated",
                    "calculator.features.compact",
                ],
            },
            ProductLine::BioAir => ProductProfile {
                description_key: "calculator.systems.bioair.desc",
                power: DefaultPower::OnRequest,
                feature_keys: &[
                    "calculator.features.highEfficiency",
                    "calculator.features.activatedSludge",
                    "calculator.features.ipsOption",
                ],
            },
            ProductLine::BioTecFlo => ProductProfile {
                description_key: "calculator.systems.biotec.desc",
                power: DefaultPower::NotRequired,
                feature_keys: &[
                    "calculator.features.noElectricity",
                    "calculator.features.gravity",
                    "calculator.features.offGrid",
                ],
            },
        }
    }
}

/// End-user price with and without VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub excluding_vat: Money,
    pub including_vat: Money,
}

impl Pricing {
    pub fn from_net(net: Money) -> Self {
        Self {
            excluding_vat: net,
            including_vat: net.with_vat(),
        }
    }
}

/// A catalog entry described for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product_line: ProductLine,
    pub name: String,
    pub model: String,
    pub material: String,
    pub max_flow: f64,
    pub inlet_height: String,
    pub population_equivalent: u32,
    /// e.g. `"6 PE"`.
    pub capacity: String,
    pub dimensions: Option<String>,
    pub power: PowerDraw,
    pub description_key: String,
    pub feature_keys: Vec<String>,
    /// `None` when no end-user price is published ("contact for pricing").
    pub pricing: Option<Pricing>,
}

impl ProductDetail {
    /// Describe an entry, priced or not.
    pub fn describe(entry: &CatalogEntry) -> Self {
        let line = entry.product_line();
        let profile = ProductProfile::for_line(line);
        Self {
            product_line: line,
            name: line.display_name().to_string(),
            model: entry.model().to_string(),
            material: entry.material().to_string(),
            max_flow: entry.max_flow(),
            inlet_height: entry.inlet_height().to_string(),
            population_equivalent: entry.population_equivalent(),
            capacity: format!("{} PE", entry.population_equivalent()),
            dimensions: entry.dimensions().map(str::to_string),
            power: match entry.power() {
                Some(kw) => PowerDraw::Rated(kw.to_string()),
                None => profile.power.to_power_draw(),
            },
            description_key: profile.description_key.to_string(),
            feature_keys: if entry.features().is_empty() {
                profile.feature_keys.iter().map(|k| k.to_string()).collect()
            } else {
                entry
                    .features()
                    .iter()
                    .map(|f| format!("{FEATURE_KEY_PREFIX}{f}"))
                    .collect()
            },
            pricing: entry.price_end_user().map(Pricing::from_net),
        }
    }

    pub fn is_priced(&self) -> bool {
        self.pricing.is_some()
    }
}

/// Priced product of `line` sized for `pe`.
///
/// `None` when the line has no entries or the matched entry has no end-user price.
pub fn resolve_product(catalog: &PriceCatalog, line: ProductLine, pe: u32) -> Option<ProductDetail> {
    let entry = catalog.entry_for(line, pe)?;
    entry.price_end_user()?;
    Some(ProductDetail::describe(entry))
}
