//! Data contract for a parsed driver application.
//!
//! The parsing service returns one [`DriverApplicationRecord`] per uploaded
//! PDF. Every scalar field is independently optional: an absent boolean means
//! "the parser could not determine this", while `false` means the applicant
//! explicitly answered no. The record is never mutated after receipt; the UI
//! only derives views from it.

use serde::{Deserialize, Serialize};

// =============================================================================
// Tri-state answers
// =============================================================================

/// A yes/no question that may also be unanswered.
///
/// Employment-history verification fields (`may_contact`, `operated_cmv`)
/// arrive as JSON `true`, `false`, or `null`/absent. "Unknown" is semantically
/// distinct from "No" and must survive into both display and export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unknown,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Unknown => None,
        }
    }
}

impl TriState {
    /// Display label; callers typically hide `Unknown` entirely.
    pub fn label(&self) -> &'static str {
        match self {
            TriState::Yes => "Yes",
            TriState::No => "No",
            TriState::Unknown => "Unknown",
        }
    }

    /// CSV cell value. Unknown serializes as the empty string, never "null".
    pub fn csv_value(&self) -> &'static str {
        match self {
            TriState::Yes => "true",
            TriState::No => "false",
            TriState::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != TriState::Unknown
    }
}

// =============================================================================
// Employment history
// =============================================================================

/// One prior job, in the chronological order supplied by the parser.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentRecord {
    pub company_name: Option<String>,
    pub position_held: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub reason_for_leaving: Option<String>,
    pub may_contact: TriState,
    pub operated_cmv: TriState,
}

// =============================================================================
// Extraction metadata
// =============================================================================

/// Parser-side bookkeeping about the extraction run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionMetadata {
    pub fields_extracted: u32,
}

// =============================================================================
// Driver application record
// =============================================================================

/// A single parsed driver application.
///
/// Field groups mirror the application form: identity/contact, license and
/// endorsements, safety/criminal history, FCRA compliance, education,
/// employment history. `raw_text` and `accident_history` are carried but
/// never surfaced in the categorized panels or the CSV export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverApplicationRecord {
    // Identity / contact
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub primary_phone: Option<String>,
    pub cell_phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub current_address: Option<String>,
    pub city_state_zip: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,

    // License
    pub has_cdl: Option<bool>,
    pub license_number: Option<String>,
    pub license_class: Option<String>,
    pub licensing_authority: Option<String>,
    pub license_expiration_date: Option<String>,
    pub dot_medical_card_expiration: Option<String>,
    pub tanker_endorsement: Option<bool>,
    pub hazmat_endorsement: Option<bool>,
    pub x_endorsement: Option<bool>,
    pub doubles_triples_endorsement: Option<bool>,
    pub passenger_endorsement: Option<bool>,
    pub school_bus_endorsement: Option<bool>,

    // Safety / criminal history
    pub convicted_of_crime: Option<bool>,
    pub felony_convictions: Option<bool>,
    pub charges_pending: Option<bool>,
    pub accidents_last_5_years: Option<bool>,
    pub failed_drug_test: Option<bool>,
    pub license_suspended_revoked: Option<bool>,
    pub moving_violations_3_years: Option<bool>,

    // FCRA compliance
    pub background_check_authorization: Option<bool>,
    pub employment_verification_authorization: Option<bool>,
    pub clearinghouse_release: Option<bool>,

    // Education
    pub attended_trucking_school: Option<bool>,
    pub school_name: Option<String>,
    pub graduation_status: Option<String>,

    // Nested / opaque sections
    pub employment_history: Vec<EmploymentRecord>,
    pub accident_history: Vec<serde_json::Value>,
    pub extraction_metadata: Option<ExtractionMetadata>,
    pub parsing_confidence: Option<f64>,
    pub raw_text: Option<String>,
}

impl DriverApplicationRecord {
    /// True when no endorsement box was checked.
    pub fn no_endorsements(&self) -> bool {
        ![
            self.tanker_endorsement,
            self.hazmat_endorsement,
            self.x_endorsement,
            self.doubles_triples_endorsement,
            self.passenger_endorsement,
            self.school_bus_endorsement,
        ]
        .iter()
        .any(|e| e.unwrap_or(false))
    }

    pub fn fields_extracted(&self) -> u32 {
        self.extraction_metadata
            .as_ref()
            .map(|m| m.fields_extracted)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "has_cdl": true,
            "license_number": "XY1234",
            "convicted_of_crime": false,
            "employment_history": [
                {
                    "company_name": "Acme Freight",
                    "position_held": "Driver",
                    "start_date": "01/2020",
                    "end_date": "06/2023",
                    "may_contact": true,
                    "operated_cmv": null
                }
            ],
            "extraction_metadata": { "fields_extracted": 42 },
            "parsing_confidence": 87.5,
            "raw_text": "..."
        }"#;

        let record: DriverApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.has_cdl, Some(true));
        // Explicit false is not the same as absent.
        assert_eq!(record.convicted_of_crime, Some(false));
        assert_eq!(record.failed_drug_test, None);
        assert_eq!(record.fields_extracted(), 42);
        assert_eq!(record.parsing_confidence, Some(87.5));

        let job = &record.employment_history[0];
        assert_eq!(job.company_name.as_deref(), Some("Acme Freight"));
        assert_eq!(job.may_contact, TriState::Yes);
        // null and absent both map to Unknown.
        assert_eq!(job.operated_cmv, TriState::Unknown);
        assert_eq!(job.reason_for_leaving, None);
    }

    #[test]
    fn test_empty_record_deserializes() {
        let record: DriverApplicationRecord = serde_json::from_str("{}").unwrap();
        assert!(record.employment_history.is_empty());
        assert!(record.accident_history.is_empty());
        assert_eq!(record.parsing_confidence, None);
        assert!(record.no_endorsements());
    }

    #[test]
    fn test_tristate_distinguishes_no_from_unknown() {
        let job: EmploymentRecord =
            serde_json::from_str(r#"{ "may_contact": false }"#).unwrap();
        assert_eq!(job.may_contact, TriState::No);
        assert_eq!(job.operated_cmv, TriState::Unknown);
        assert_eq!(job.may_contact.csv_value(), "false");
        assert_eq!(job.operated_cmv.csv_value(), "");
    }
}
