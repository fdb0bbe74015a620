//! The finished clinical report.
//!
//! A `Report` is assembled once by `ReportGenerator` and never mutated
//! afterwards. Its serialized form is the interchange contract consumed by the
//! clinic dashboard, so the key names here are stable.

use crate::measurement::ScreeningMeasurement;
use crate::risk::{RiskTier, Urgency};
use chrono::{DateTime, Utc};
use rsg_types::PatientId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of the vital signs captured alongside the retinal images.
///
/// Copied from the measurement so the report stays self-contained after the
/// input is gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VitalSigns {
    pub heart_rate_bpm: u16,
    pub blood_oxygen_percent: f64,
    pub temperature_celsius: f64,
    pub systolic_bp_mmhg: f64,
}

impl VitalSigns {
    /// Copies the four vital-sign fields out of a measurement.
    pub fn snapshot(measurement: &ScreeningMeasurement) -> Self {
        Self {
            heart_rate_bpm: measurement.heart_rate,
            blood_oxygen_percent: measurement.blood_oxygen,
            temperature_celsius: measurement.temperature,
            systolic_bp_mmhg: measurement.blood_pressure_systolic,
        }
    }
}

/// A structured, human-readable screening report.
///
/// Everything except `screening_timestamp` is a deterministic function of the
/// input measurement; the timestamp records when the report was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    /// Identifier copied from the input measurement.
    #[schema(value_type = String)]
    pub patient_id: PatientId,
    /// When this report was generated (UTC, RFC 3339 on the wire).
    pub screening_timestamp: DateTime<Utc>,
    /// Three-tier risk classification.
    pub risk_level: RiskTier,
    /// The raw device-computed score the classification was derived from.
    pub cvd_risk_score: f64,
    /// The score rendered for lay readers, e.g. `"75.0%"`.
    pub risk_percentage: String,
    /// Clinical-workflow urgency paired with the risk level.
    pub urgency: Urgency,
    /// Vital signs copied from the measurement.
    pub vital_signs: VitalSigns,
    /// Fixed lay-audience explanation for the risk level.
    pub clinical_explanation: String,
    /// Ordered directives: tier base list, then condition-triggered advisories.
    pub recommendations: Vec<String>,
    /// Recommended days until the next screening.
    pub followup_days: u32,
}

/// Renders a risk score as a percentage string with one decimal place.
pub fn risk_percentage(risk_score: f64) -> String {
    format!("{:.1}%", risk_score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_percentage_formatting() {
        assert_eq!(risk_percentage(0.75), "75.0%");
        assert_eq!(risk_percentage(0.0), "0.0%");
        assert_eq!(risk_percentage(1.0), "100.0%");
        assert_eq!(risk_percentage(0.4567), "45.7%");
    }

    #[test]
    fn test_vital_signs_snapshot_copies_all_fields() {
        let measurement =
            ScreeningMeasurement::new("P001", 0.2, 64, 98.2, 36.4, 118.0).unwrap();
        let vitals = VitalSigns::snapshot(&measurement);

        assert_eq!(vitals.heart_rate_bpm, 64);
        assert_eq!(vitals.blood_oxygen_percent, 98.2);
        assert_eq!(vitals.temperature_celsius, 36.4);
        assert_eq!(vitals.systolic_bp_mmhg, 118.0);
    }
}
