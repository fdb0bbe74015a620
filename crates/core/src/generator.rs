//! Report generation service.

use crate::clock::{Clock, SystemClock};
use crate::measurement::ScreeningMeasurement;
use crate::recommendations::recommendations_for;
use crate::report::{risk_percentage, Report, VitalSigns};
use crate::risk::RiskTier;
use crate::ReportResult;

/// Service that turns screening measurements into clinical reports.
///
/// Generation is a stateless, single-pass transformation: there is no shared
/// mutable state and no I/O beyond reading the injected clock, so one
/// generator can be cloned freely across threads or request handlers.
#[derive(Debug, Clone)]
pub struct ReportGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl ReportGenerator<SystemClock> {
    /// Creates a generator stamping reports with the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for ReportGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReportGenerator<C> {
    /// Creates a generator with an explicit clock, for deterministic tests.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Generates a complete report for a screening measurement.
    ///
    /// Validates the measurement, classifies the risk score, then derives
    /// urgency, explanation, recommendations, and follow-up interval from the
    /// classification. The operation is atomic: it returns either a fully
    /// populated report or a validation error — never a partial report.
    ///
    /// # Arguments
    ///
    /// * `measurement` - A screening measurement uploaded by the device.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RiskScoreOutOfRange` if the risk score is
    /// outside [0.0, 1.0]. Implausible vital signs are not errors; they add
    /// condition-triggered recommendations instead.
    pub fn generate(&self, measurement: &ScreeningMeasurement) -> ReportResult<Report> {
        let risk_level = RiskTier::classify(measurement.cvd_risk_score)?;

        let report = Report {
            patient_id: measurement.patient_id.clone(),
            screening_timestamp: self.clock.now(),
            risk_level,
            cvd_risk_score: measurement.cvd_risk_score,
            risk_percentage: risk_percentage(measurement.cvd_risk_score),
            urgency: risk_level.urgency(),
            vital_signs: VitalSigns::snapshot(measurement),
            clinical_explanation: risk_level.clinical_explanation().to_string(),
            recommendations: recommendations_for(risk_level, measurement),
            followup_days: risk_level.followup_days(),
        };

        tracing::debug!(
            "generated {} report for patient {}",
            risk_level.as_str(),
            report.patient_id
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::recommendations::HIGH_BASE_RECOMMENDATIONS;
    use crate::risk::Urgency;
    use crate::ReportError;
    use chrono::{DateTime, Utc};

    fn fixed_clock() -> FixedClock {
        FixedClock(
            DateTime::parse_from_rfc3339("2026-03-14T09:26:53Z")
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn p001_measurement() -> ScreeningMeasurement {
        ScreeningMeasurement::new("P001", 0.75, 88, 97.5, 36.8, 145.0).unwrap()
    }

    #[test]
    fn test_generate_end_to_end_high_risk() {
        let generator = ReportGenerator::with_clock(fixed_clock());
        let report = generator.generate(&p001_measurement()).unwrap();

        assert_eq!(report.patient_id.as_str(), "P001");
        assert_eq!(report.risk_level, RiskTier::High);
        assert_eq!(report.urgency, Urgency::Urgent);
        assert_eq!(report.cvd_risk_score, 0.75);
        assert_eq!(report.risk_percentage, "75.0%");
        assert_eq!(report.followup_days, 7);
        assert_eq!(report.vital_signs.heart_rate_bpm, 88);
        assert_eq!(report.vital_signs.blood_oxygen_percent, 97.5);
        assert_eq!(report.vital_signs.temperature_celsius, 36.8);
        assert_eq!(report.vital_signs.systolic_bp_mmhg, 145.0);

        // Neither advisory fires: heart rate ≤ 100 and temperature ≤ 37.5.
        assert_eq!(
            report.recommendations,
            HIGH_BASE_RECOMMENDATIONS.map(String::from).to_vec()
        );
    }

    #[test]
    fn test_generate_appends_both_advisories() {
        let generator = ReportGenerator::with_clock(fixed_clock());
        let measurement =
            ScreeningMeasurement::new("P001", 0.75, 110, 97.5, 38.0, 145.0).unwrap();
        let report = generator.generate(&measurement).unwrap();

        assert_eq!(report.recommendations.len(), 8);
    }

    #[test]
    fn test_generate_is_idempotent_under_fixed_clock() {
        let generator = ReportGenerator::with_clock(fixed_clock());
        let measurement = p001_measurement();

        let first = generator.generate(&measurement).unwrap();
        let second = generator.generate(&measurement).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_rejects_out_of_range_score() {
        let generator = ReportGenerator::with_clock(fixed_clock());
        let measurement =
            ScreeningMeasurement::new("P001", 1.2, 88, 97.5, 36.8, 145.0).unwrap();

        match generator.generate(&measurement) {
            Err(ReportError::RiskScoreOutOfRange(value)) => {
                assert_eq!(value, 1.2);
            }
            other => panic!("Expected RiskScoreOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_uses_injected_clock() {
        let generator = ReportGenerator::with_clock(fixed_clock());
        let report = generator.generate(&p001_measurement()).unwrap();

        assert_eq!(
            report.screening_timestamp.to_rfc3339(),
            "2026-03-14T09:26:53+00:00"
        );
    }

    #[test]
    fn test_serialized_report_uses_stable_key_names() {
        let generator = ReportGenerator::with_clock(fixed_clock());
        let report = generator.generate(&p001_measurement()).unwrap();

        let doc = serde_json::to_value(&report).unwrap();
        let object = doc.as_object().unwrap();

        for key in [
            "patient_id",
            "screening_timestamp",
            "risk_level",
            "cvd_risk_score",
            "risk_percentage",
            "urgency",
            "vital_signs",
            "clinical_explanation",
            "recommendations",
            "followup_days",
        ] {
            assert!(object.contains_key(key), "missing key: {}", key);
        }
        assert_eq!(object.len(), 10);

        let vitals = doc["vital_signs"].as_object().unwrap();
        for key in [
            "heart_rate_bpm",
            "blood_oxygen_percent",
            "temperature_celsius",
            "systolic_bp_mmhg",
        ] {
            assert!(vitals.contains_key(key), "missing vitals key: {}", key);
        }
        assert_eq!(vitals.len(), 4);

        assert_eq!(doc["risk_level"], "HIGH");
        assert_eq!(doc["urgency"], "URGENT");
    }

    #[test]
    fn test_moderate_and_low_reports() {
        let generator = ReportGenerator::with_clock(fixed_clock());

        let moderate = ScreeningMeasurement::new("P002", 0.55, 72, 98.0, 36.6, 128.0).unwrap();
        let report = generator.generate(&moderate).unwrap();
        assert_eq!(report.risk_level, RiskTier::Moderate);
        assert_eq!(report.urgency, Urgency::Standard);
        assert_eq!(report.followup_days, 28);
        assert_eq!(report.recommendations.len(), 6);

        let low = ScreeningMeasurement::new("P003", 0.1, 64, 98.5, 36.5, 112.0).unwrap();
        let report = generator.generate(&low).unwrap();
        assert_eq!(report.risk_level, RiskTier::Low);
        assert_eq!(report.urgency, Urgency::Routine);
        assert_eq!(report.followup_days, 365);
        assert_eq!(report.recommendations.len(), 5);
    }
}
