//! Ordered rule cascade: the first rule whose predicate holds picks the
//! recommended product line and its alternatives.

use serde::Serialize;

use biosite_catalog::{PriceCatalog, ProductLine};

use crate::error::RecommendError;
use crate::input::{GroundwaterLevel, HouseholdInput, PropertyType};
use crate::pe::compute_pe;
use crate::resolver::{ProductDetail, resolve_product};

/// How a rule chooses its recommended line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Line(ProductLine),
    /// `at_or_below` when the PE is `<= threshold`, otherwise `above`.
    ByPe {
        threshold: u32,
        at_or_below: ProductLine,
        above: ProductLine,
    },
}

impl Pick {
    fn line(&self, pe: u32) -> ProductLine {
        match *self {
            Pick::Line(line) => line,
            Pick::ByPe {
                threshold,
                at_or_below,
                above,
            } => {
                if pe <= threshold {
                    at_or_below
                } else {
                    above
                }
            }
        }
    }
}

/// One row of the decision table.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&HouseholdInput, u32) -> bool,
    pub pick: Pick,
    /// In display order.
    pub alternatives: Vec<ProductLine>,
}

impl Rule {
    pub fn new(
        name: &'static str,
        applies: fn(&HouseholdInput, u32) -> bool,
        pick: Pick,
        alternatives: impl Into<Vec<ProductLine>>,
    ) -> Self {
        Self {
            name,
            applies,
            pick,
            alternatives: alternatives.into(),
        }
    }
}

/// The standard decision table, most specific condition first.
pub fn default_rules() -> Vec<Rule> {
    use ProductLine::*;

    vec![
        Rule::new(
            "seasonal",
            |input, _| input.property_type == PropertyType::Seasonal,
            Pick::Line(BioTecFlo),
            [BioAir],
        ),
        Rule::new(
            "high_groundwater",
            |input, _| input.resolved_groundwater() == GroundwaterLevel::High,
            Pick::Line(BioDisc),
            [BioFicient],
        ),
        Rule::new(
            "peak_load",
            |input, _| {
                input.peak_occupant_count > input.occupant_count
                    && input.occupant_count <= 4
                    && input.peak_occupant_count >= 8
            },
            Pick::Line(BioFicient),
            [BioDisc],
        ),
        Rule::new(
            "small_household",
            |input, _| (2..=4).contains(&input.occupant_count),
            Pick::Line(BioAir),
            [BioFicient, BioDisc],
        ),
        Rule::new(
            "medium_household",
            |input, _| (5..=6).contains(&input.occupant_count),
            Pick::Line(BioFicient),
            [BioDisc],
        ),
        Rule::new(
            "default",
            |_, _| true,
            Pick::ByPe {
                threshold: 6,
                at_or_below: BioDisc,
                above: BioFicient,
            },
            [BioAir],
        ),
    ]
}

/// Outcome of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub population_equivalent: u32,
    /// Name of the rule that fired.
    pub rule: &'static str,
    pub recommended: ProductDetail,
    /// Priced alternatives only, at most as many as the rule lists.
    pub alternatives: Vec<ProductDetail>,
}

/// Stateless recommender over an immutable catalog.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: PriceCatalog,
    rules: Vec<Rule>,
}

impl RecommendationEngine {
    pub fn new(catalog: PriceCatalog) -> Self {
        Self::with_rules(catalog, default_rules())
    }

    pub fn with_rules(catalog: PriceCatalog, rules: Vec<Rule>) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Size and select a system for a validated household.
    ///
    /// A recommended line whose matched entry has no published price is still
    /// returned, with `pricing: None`. Alternatives without a price are dropped.
    pub fn recommend(&self, input: &HouseholdInput) -> Result<Recommendation, RecommendError> {
        let pe = compute_pe(input.effective_occupants(), input.water_usage_per_person);

        let rule = self
            .rules
            .iter()
            .find(|rule| (rule.applies)(input, pe))
            .ok_or(RecommendError::NoRuleMatched)?;

        let line = rule.pick.line(pe);
        let entry = self
            .catalog
            .entry_for(line, pe)
            .ok_or(RecommendError::MissingProductLine(line))?;
        let recommended = ProductDetail::describe(entry);

        let alternatives = rule
            .alternatives
            .iter()
            .filter(|alt| **alt != line)
            .filter_map(|alt| resolve_product(&self.catalog, *alt, pe))
            .collect();

        Ok(Recommendation {
            population_equivalent: pe,
            rule: rule.name,
            recommended,
            alternatives,
        })
    }
}
