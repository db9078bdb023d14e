use serde::{Deserialize, Serialize};

use biosite_core::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Business,
    Seasonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundwaterLevel {
    Low,
    High,
    /// Not known by the visitor; treated as `Low`.
    #[default]
    Auto,
}

impl GroundwaterLevel {
    pub fn resolve(self) -> GroundwaterLevel {
        match self {
            GroundwaterLevel::Auto => GroundwaterLevel::Low,
            other => other,
        }
    }
}

/// Parameters of one calculator submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdInput {
    pub occupant_count: u32,
    pub peak_occupant_count: u32,
    pub property_type: PropertyType,
    /// Litres per person per day.
    pub water_usage_per_person: f64,
    pub groundwater_level: GroundwaterLevel,
}

impl HouseholdInput {
    /// Form-layer validation; the engine assumes it has passed.
    pub fn validate(&self) -> DomainResult<()> {
        if self.occupant_count == 0 {
            return Err(DomainError::validation("occupantCount must be at least 1"));
        }
        if self.peak_occupant_count < self.occupant_count {
            return Err(DomainError::validation(
                "peakOccupantCount must not be lower than occupantCount",
            ));
        }
        if !self.water_usage_per_person.is_finite() || self.water_usage_per_person <= 0.0 {
            return Err(DomainError::validation(
                "waterUsagePerPerson must be a positive number",
            ));
        }
        Ok(())
    }

    pub fn effective_occupants(&self) -> u32 {
        self.occupant_count.max(self.peak_occupant_count)
    }

    pub fn resolved_groundwater(&self) -> GroundwaterLevel {
        self.groundwater_level.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(occupants: u32, peak: u32) -> HouseholdInput {
        HouseholdInput {
            occupant_count: occupants,
            peak_occupant_count: peak,
            property_type: PropertyType::House,
            water_usage_per_person: 150.0,
            groundwater_level: GroundwaterLevel::Auto,
        }
    }

    #[test]
    fn auto_groundwater_resolves_to_low() {
        assert_eq!(house(4, 4).resolved_groundwater(), GroundwaterLevel::Low);
        assert_eq!(GroundwaterLevel::High.resolve(), GroundwaterLevel::High);
    }

    #[test]
    fn effective_occupants_uses_peak() {
        assert_eq!(house(2, 10).effective_occupants(), 10);
        assert_eq!(house(5, 5).effective_occupants(), 5);
    }

    #[test]
    fn validate_rejects_zero_occupants() {
        assert!(matches!(house(0, 0).validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_peak_below_baseline() {
        assert!(matches!(house(5, 3).validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_non_positive_usage() {
        let mut input = house(4, 4);
        input.water_usage_per_person = 0.0;
        assert!(input.validate().is_err());
        input.water_usage_per_person = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn deserializes_lowercase_enums() {
        let input: HouseholdInput = serde_json::from_str(
            r#"{"occupantCount":2,"peakOccupantCount":3,"propertyType":"seasonal","waterUsagePerPerson":120,"groundwaterLevel":"high"}"#,
        )
        .unwrap();
        assert_eq!(input.property_type, PropertyType::Seasonal);
        assert_eq!(input.groundwater_level, GroundwaterLevel::High);
        assert!(input.validate().is_ok());
    }
}
