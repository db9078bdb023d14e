//! Calculator results rendered into the visitor's language.

use serde::Serialize;

use biosite_calculator::{PowerDraw, ProductDetail, Recommendation};
use biosite_catalog::ProductLine;
use biosite_core::Money;

use crate::context::AppContext;
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedProduct {
    pub product_line: ProductLine,
    pub name: String,
    pub model: String,
    pub material: String,
    pub capacity: String,
    pub dimensions: String,
    pub power: String,
    pub description: String,
    pub features: Vec<String>,
    pub price_excluding_vat_cents: Option<u64>,
    pub price_including_vat_cents: Option<u64>,
    /// Formatted VAT-inclusive price, or the "contact for pricing" label.
    pub price_label: String,
}

impl LocalizedProduct {
    pub fn from_detail(detail: &ProductDetail, ctx: &AppContext) -> Self {
        let price_label = match &detail.pricing {
            Some(p) => format_price(p.including_vat, ctx.locale()),
            None => ctx.t("calculator.results.contactForPricing").to_string(),
        };

        Self {
            product_line: detail.product_line,
            name: detail.name.clone(),
            model: detail.model.clone(),
            material: detail.material.clone(),
            capacity: detail.capacity.clone(),
            dimensions: detail
                .dimensions
                .clone()
                .unwrap_or_else(|| ctx.t("calculator.customDimensions").to_string()),
            power: match &detail.power {
                PowerDraw::Rated(kw) => kw.clone(),
                PowerDraw::NotRequired => ctx.t("calculator.noPower").to_string(),
                PowerDraw::OnRequest => ctx.t("calculator.customPower").to_string(),
            },
            description: ctx.t(&detail.description_key).to_string(),
            features: detail
                .feature_keys
                .iter()
                .map(|k| ctx.t(k).to_string())
                .collect(),
            price_excluding_vat_cents: detail.pricing.map(|p| p.excluding_vat.cents()),
            price_including_vat_cents: detail.pricing.map(|p| p.including_vat.cents()),
            price_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedRecommendation {
    pub locale: Locale,
    pub population_equivalent: u32,
    pub rule: &'static str,
    pub recommended: LocalizedProduct,
    pub alternatives: Vec<LocalizedProduct>,
    pub note: String,
}

impl LocalizedRecommendation {
    pub fn new(rec: &Recommendation, ctx: &AppContext) -> Self {
        Self {
            locale: ctx.locale(),
            population_equivalent: rec.population_equivalent,
            rule: rec.rule,
            recommended: LocalizedProduct::from_detail(&rec.recommended, ctx),
            alternatives: rec
                .alternatives
                .iter()
                .map(|alt| LocalizedProduct::from_detail(alt, ctx))
                .collect(),
            note: ctx.t("calculator.results.note").to_string(),
        }
    }
}

/// `et`: `7 688,00 €`; `en`: `€7,688.00`.
pub fn format_price(amount: Money, locale: Locale) -> String {
    let cents = amount.cents();
    let (group_sep, decimal_sep) = match locale {
        Locale::Et => ('\u{a0}', ','),
        Locale::En => (',', '.'),
    };

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }

    match locale {
        Locale::Et => format!("{grouped}{decimal_sep}{:02}\u{a0}€", cents % 100),
        Locale::En => format!("€{grouped}{decimal_sep}{:02}", cents % 100),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::i18n::Translations;
    use biosite_calculator::{GroundwaterLevel, HouseholdInput, PropertyType, RecommendationEngine};
    use biosite_catalog::PriceCatalog;

    fn ctx(locale: Locale) -> AppContext {
        AppContext::new(locale, Arc::new(Translations::builtin().unwrap()))
    }

    fn recommend(occupants: u32, property_type: PropertyType) -> Recommendation {
        RecommendationEngine::new(PriceCatalog::builtin().unwrap())
            .recommend(&HouseholdInput {
                occupant_count: occupants,
                peak_occupant_count: occupants,
                property_type,
                water_usage_per_person: 150.0,
                groundwater_level: GroundwaterLevel::Auto,
            })
            .unwrap()
    }

    #[test]
    fn formats_prices_per_locale() {
        let amount = Money::from_cents(768_800);
        assert_eq!(format_price(amount, Locale::En), "€7,688.00");
        assert_eq!(format_price(amount, Locale::Et), "7\u{a0}688,00\u{a0}€");
        assert_eq!(format_price(Money::from_cents(5), Locale::En), "€0.05");
        assert_eq!(format_price(Money::from_cents(123_456_789), Locale::En), "€1,234,567.89");
    }

    #[test]
    fn translates_features_and_description() {
        let rec = recommend(4, PropertyType::House);
        let view = LocalizedRecommendation::new(&rec, &ctx(Locale::En));
        assert_eq!(view.recommended.name, "BioAir");
        assert_eq!(view.recommended.description, "High-efficiency activated sludge plant.");
        assert!(view.recommended.features.contains(&"Activated sludge process".to_string()));
        assert_eq!(view.alternatives.len(), 2);
    }

    #[test]
    fn gravity_line_shows_no_power_label() {
        let rec = recommend(4, PropertyType::Seasonal);
        let view = LocalizedRecommendation::new(&rec, &ctx(Locale::Et));
        assert_eq!(view.recommended.power, "Elektrit ei vaja");
    }

    #[test]
    fn power_label_follows_unit_size() {
        let small = LocalizedRecommendation::new(&recommend(4, PropertyType::House), &ctx(Locale::En));
        assert_eq!(small.recommended.model, "BioAir 4");
        assert_eq!(small.recommended.power, "On request");

        let large = LocalizedRecommendation::new(&recommend(20, PropertyType::Business), &ctx(Locale::En));
        assert_eq!(large.recommended.model, "BioFicient 20");
        assert_eq!(large.recommended.power, "0.75 kW");
        assert!(large.recommended.features.contains(&"High treatment efficiency".to_string()));
    }

    #[test]
    fn unpriced_recommendation_shows_contact_label() {
        let rec = recommend(12, PropertyType::Seasonal);
        let view = LocalizedRecommendation::new(&rec, &ctx(Locale::En));
        assert_eq!(view.recommended.price_label, "Contact us for pricing");
        assert_eq!(view.recommended.price_including_vat_cents, None);
    }
}
