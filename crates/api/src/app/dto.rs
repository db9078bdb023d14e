use serde::{Deserialize, Serialize};

use biosite_calculator::{GroundwaterLevel, HouseholdInput, PropertyType, REFERENCE_USAGE_LITRES};
use biosite_catalog::{CatalogEntry, PriceCatalog, ProductLine};

// -------------------------
// Request DTOs
// -------------------------

/// Calculator form body. Only the occupant count and property type are mandatory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRequest {
    pub occupant_count: u32,
    #[serde(default)]
    pub peak_occupant_count: Option<u32>,
    pub property_type: PropertyType,
    #[serde(default)]
    pub water_usage_per_person: Option<f64>,
    #[serde(default)]
    pub groundwater_level: GroundwaterLevel,
}

impl CalculatorRequest {
    pub fn into_input(self) -> HouseholdInput {
        HouseholdInput {
            occupant_count: self.occupant_count,
            peak_occupant_count: self.peak_occupant_count.unwrap_or(self.occupant_count),
            property_type: self.property_type,
            water_usage_per_person: self.water_usage_per_person.unwrap_or(REFERENCE_USAGE_LITRES),
            groundwater_level: self.groundwater_level,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogLineResponse<'a> {
    pub product_line: ProductLine,
    pub name: &'static str,
    pub entries: &'a [CatalogEntry],
}

pub fn catalog_to_json(catalog: &PriceCatalog) -> Vec<CatalogLineResponse<'_>> {
    catalog
        .lines()
        .map(|line| CatalogLineResponse {
            product_line: line,
            name: line.display_name(),
            entries: catalog.entries(line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_take_form_defaults() {
        let req: CalculatorRequest =
            serde_json::from_str(r#"{"occupantCount":3,"propertyType":"house"}"#).unwrap();
        let input = req.into_input();
        assert_eq!(input.peak_occupant_count, 3);
        assert_eq!(input.water_usage_per_person, REFERENCE_USAGE_LITRES);
        assert_eq!(input.groundwater_level, GroundwaterLevel::Auto);
    }

    #[test]
    fn catalog_json_groups_entries_by_line() {
        let catalog = PriceCatalog::builtin().unwrap();
        let json = serde_json::to_value(catalog_to_json(&catalog)).unwrap();
        let lines = json.as_array().unwrap();
        assert_eq!(lines.len(), ProductLine::ALL.len());
        assert!(lines.iter().all(|l| !l["entries"].as_array().unwrap().is_empty()));
    }
}
