//! Consultation (lead) form: validation and the record forwarded to the form service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use biosite_calculator::{GroundwaterLevel, PropertyType};
use biosite_core::LeadId;

/// Tag sent with every forwarded lead.
pub const LEAD_SOURCE: &str = "kingspan-ee";

const MAX_FIELD_CHARS: usize = 200;
const MAX_MESSAGE_CHARS: usize = 5_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("consent is required")]
    ConsentRequired,

    #[error("{field} has an unsupported value `{value}`")]
    InvalidChoice { field: &'static str, value: String },

    #[error("{0} is too long")]
    TooLong(&'static str),
}

/// Form fields as posted by the browser. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub pe: String,
    #[serde(default, alias = "groundwater")]
    pub gw: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub consent: bool,
    /// Hidden honeypot; humans leave it empty.
    #[serde(default)]
    pub company: String,
}

/// Validated lead, as forwarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub id: LeadId,
    pub source: &'static str,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub pe: Option<String>,
    pub groundwater: Option<GroundwaterLevel>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeadOutcome {
    Accepted(LeadSubmission),
    /// Honeypot was filled; answer as if accepted, forward nothing.
    Discarded,
}

impl LeadForm {
    pub fn validate(self, id: LeadId, now: DateTime<Utc>) -> Result<LeadOutcome, LeadError> {
        if !self.company.trim().is_empty() {
            return Ok(LeadOutcome::Discarded);
        }

        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        if !looks_like_email(&email) {
            return Err(LeadError::InvalidEmail);
        }
        if !self.consent {
            return Err(LeadError::ConsentRequired);
        }

        let property_type = match self.property_type.trim() {
            "" => None,
            "house" => Some(PropertyType::House),
            "business" => Some(PropertyType::Business),
            "seasonal" => Some(PropertyType::Seasonal),
            other => {
                return Err(LeadError::InvalidChoice {
                    field: "type",
                    value: other.to_string(),
                })
            }
        };
        let groundwater = match self.gw.trim() {
            "" => None,
            "low" => Some(GroundwaterLevel::Low),
            "high" => Some(GroundwaterLevel::High),
            "auto" => Some(GroundwaterLevel::Auto),
            other => {
                return Err(LeadError::InvalidChoice {
                    field: "gw",
                    value: other.to_string(),
                })
            }
        };

        let message = optional(&self.message);
        if message.as_ref().is_some_and(|m| m.chars().count() > MAX_MESSAGE_CHARS) {
            return Err(LeadError::TooLong("message"));
        }

        Ok(LeadOutcome::Accepted(LeadSubmission {
            id,
            source: LEAD_SOURCE,
            created_at: now,
            name,
            email,
            phone: bounded("phone", &self.phone)?,
            property_type,
            pe: bounded("pe", &self.pe)?,
            groundwater,
            message,
        }))
    }
}

fn required(field: &'static str, value: &str) -> Result<String, LeadError> {
    bounded(field, value)?.ok_or(LeadError::MissingField(field))
}

fn bounded(field: &'static str, value: &str) -> Result<Option<String>, LeadError> {
    let value = optional(value);
    if value.as_ref().is_some_and(|v| v.chars().count() > MAX_FIELD_CHARS) {
        return Err(LeadError::TooLong(field));
    }
    Ok(value)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Accepts a JSON bool or the string an HTML checkbox posts (`"on"`).
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Checkbox {
        Bool(bool),
        Text(String),
    }

    Ok(match Checkbox::deserialize(deserializer)? {
        Checkbox::Bool(b) => b,
        Checkbox::Text(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "on" | "true" | "yes" | "1"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> LeadForm {
        LeadForm {
            name: "  Mari Maasikas ".to_string(),
            email: "mari@example.ee".to_string(),
            phone: "+372 5555 5555".to_string(),
            property_type: "house".to_string(),
            pe: "5".to_string(),
            gw: "high".to_string(),
            message: "".to_string(),
            consent: true,
            company: "".to_string(),
        }
    }

    fn accept(form: LeadForm) -> LeadSubmission {
        match form.validate(LeadId::new(), Utc::now()).unwrap() {
            LeadOutcome::Accepted(lead) => lead,
            LeadOutcome::Discarded => panic!("Expected lead to be accepted"),
        }
    }

    #[test]
    fn valid_form_is_accepted_and_trimmed() {
        let lead = accept(form());
        assert_eq!(lead.name, "Mari Maasikas");
        assert_eq!(lead.source, LEAD_SOURCE);
        assert_eq!(lead.property_type, Some(PropertyType::House));
        assert_eq!(lead.groundwater, Some(GroundwaterLevel::High));
        assert_eq!(lead.message, None);
    }

    #[test]
    fn honeypot_discards_silently() {
        let mut f = form();
        f.company = "Spam OÜ".to_string();
        f.email = "not an email".to_string();
        assert_eq!(f.validate(LeadId::new(), Utc::now()).unwrap(), LeadOutcome::Discarded);
    }

    #[test]
    fn name_and_email_are_required() {
        let mut f = form();
        f.name = "   ".to_string();
        assert_eq!(
            f.validate(LeadId::new(), Utc::now()).unwrap_err(),
            LeadError::MissingField("name")
        );

        let mut f = form();
        f.email.clear();
        assert_eq!(
            f.validate(LeadId::new(), Utc::now()).unwrap_err(),
            LeadError::MissingField("email")
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["mari", "@example.ee", "mari@localhost", "mari@.ee", "ma ri@example.ee"] {
            let mut f = form();
            f.email = email.to_string();
            assert_eq!(
                f.validate(LeadId::new(), Utc::now()).unwrap_err(),
                LeadError::InvalidEmail,
                "{email}"
            );
        }
    }

    #[test]
    fn consent_is_required() {
        let mut f = form();
        f.consent = false;
        assert_eq!(
            f.validate(LeadId::new(), Utc::now()).unwrap_err(),
            LeadError::ConsentRequired
        );
    }

    #[test]
    fn rejects_unknown_property_type() {
        let mut f = form();
        f.property_type = "castle".to_string();
        assert!(matches!(
            f.validate(LeadId::new(), Utc::now()),
            Err(LeadError::InvalidChoice { field: "type", .. })
        ));
    }

    #[test]
    fn rejects_oversized_message() {
        let mut f = form();
        f.message = "x".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            f.validate(LeadId::new(), Utc::now()).unwrap_err(),
            LeadError::TooLong("message")
        );
    }

    #[test]
    fn deserializes_browser_form_payload() {
        let f: LeadForm = serde_json::from_str(
            r#"{"name":"Jaan","email":"jaan@example.ee","type":"seasonal","gw":"low","consent":"on"}"#,
        )
        .unwrap();
        assert!(f.consent);
        let lead = accept(f);
        assert_eq!(lead.property_type, Some(PropertyType::Seasonal));
        assert_eq!(lead.phone, None);
    }

    #[test]
    fn submission_serializes_type_field() {
        let lead = accept(form());
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["type"], "house");
        assert_eq!(json["groundwater"], "high");
        assert_eq!(json["source"], LEAD_SOURCE);
    }
}
