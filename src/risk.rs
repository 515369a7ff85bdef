//! Risk triage for a parsed driver application.
//!
//! Pure, total classification: every record maps to exactly one
//! [`RiskLevel`]. Absent booleans never escalate a record; only an explicit
//! `true` counts against the applicant.

use crate::record::DriverApplicationRecord;

/// Triage level derived from the safety/criminal answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Badge text for display.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

/// Classify a record into a risk level.
///
/// Precedence is fixed: any disqualifying answer yields `High` regardless of
/// the minor-issue fields; moving violations alone yield `Medium`; everything
/// else is `Low`.
pub fn classify(record: &DriverApplicationRecord) -> RiskLevel {
    let flagged = |answer: Option<bool>| answer.unwrap_or(false);

    let disqualifying = flagged(record.convicted_of_crime)
        || flagged(record.failed_drug_test)
        || flagged(record.accidents_last_5_years)
        || flagged(record.license_suspended_revoked);

    if disqualifying {
        RiskLevel::High
    } else if flagged(record.moving_violations_3_years) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DriverApplicationRecord {
        DriverApplicationRecord::default()
    }

    #[test]
    fn test_empty_record_is_low_risk() {
        assert_eq!(classify(&record()), RiskLevel::Low);
    }

    #[test]
    fn test_any_disqualifying_answer_is_high_risk() {
        for field in 0..4 {
            let mut r = record();
            match field {
                0 => r.convicted_of_crime = Some(true),
                1 => r.failed_drug_test = Some(true),
                2 => r.accidents_last_5_years = Some(true),
                _ => r.license_suspended_revoked = Some(true),
            }
            assert_eq!(classify(&r), RiskLevel::High);
        }
    }

    #[test]
    fn test_moving_violations_alone_are_medium_risk() {
        let mut r = record();
        r.moving_violations_3_years = Some(true);
        assert_eq!(classify(&r), RiskLevel::Medium);
    }

    #[test]
    fn test_high_wins_over_medium() {
        let mut r = record();
        r.moving_violations_3_years = Some(true);
        r.failed_drug_test = Some(true);
        assert_eq!(classify(&r), RiskLevel::High);
    }

    #[test]
    fn test_explicit_no_does_not_escalate() {
        let mut r = record();
        r.convicted_of_crime = Some(false);
        r.failed_drug_test = Some(false);
        r.moving_violations_3_years = Some(false);
        assert_eq!(classify(&r), RiskLevel::Low);
    }

    #[test]
    fn test_non_triage_fields_are_ignored() {
        // Felony convictions and pending charges are displayed but do not
        // feed the triage rule.
        let mut r = record();
        r.felony_convictions = Some(true);
        r.charges_pending = Some(true);
        assert_eq!(classify(&r), RiskLevel::Low);
    }
}
