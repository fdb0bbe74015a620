//! Recommendation rules.
//!
//! Every report carries an ordered list of concrete directives: a fixed base
//! list keyed by risk tier, followed by vital-sign advisories triggered by the
//! measurement itself. Order is significant and part of the output contract —
//! base items first, then the heart-rate advisory, then the fever advisory.

use crate::constants::{FEVER_THRESHOLD_CELSIUS, TACHYCARDIA_THRESHOLD_BPM};
use crate::measurement::ScreeningMeasurement;
use crate::risk::RiskTier;

/// Base recommendations for HIGH-risk screenings.
pub const HIGH_BASE_RECOMMENDATIONS: [&str; 6] = [
    "Consult a cardiologist within 1 week",
    "Schedule ECG and echocardiography",
    "Reduce sodium intake to <2300mg/day",
    "Increase physical activity: 30min/day moderate exercise",
    "Monitor blood pressure daily",
    "Consider blood pressure medication if not on one",
];

/// Base recommendations for MODERATE-risk screenings.
pub const MODERATE_BASE_RECOMMENDATIONS: [&str; 6] = [
    "Schedule cardiology appointment within 4 weeks",
    "Monitor blood pressure 2-3 times/week",
    "Maintain healthy diet (Mediterranean diet recommended)",
    "Exercise 30 minutes daily, 5 days/week",
    "Manage stress through meditation or yoga",
    "Avoid smoking and excessive alcohol",
];

/// Base recommendations for LOW-risk screenings.
pub const LOW_BASE_RECOMMENDATIONS: [&str; 5] = [
    "Maintain current lifestyle habits",
    "Continue regular exercise and healthy diet",
    "Recheck cardiovascular screening in 12 months",
    "Monitor blood pressure quarterly",
    "Annual health checkup recommended",
];

/// Advisory appended when the measured heart rate exceeds the tachycardia
/// threshold.
pub const TACHYCARDIA_ADVISORY: &str = "Heart rate elevated; reduce caffeine and stress";

/// Advisory appended when the measured temperature exceeds the fever
/// threshold.
pub const FEVER_ADVISORY: &str = "Slight fever detected; consult physician";

/// Assembles the ordered recommendation list for a classified measurement.
///
/// Starts from the tier's base list, then appends condition-triggered
/// advisories evaluated against the measurement. The two vital-sign checks run
/// regardless of tier and independently of each other, heart rate first, so
/// both advisories can appear on the same report.
pub fn recommendations_for(tier: RiskTier, measurement: &ScreeningMeasurement) -> Vec<String> {
    let base: &[&str] = match tier {
        RiskTier::High => &HIGH_BASE_RECOMMENDATIONS,
        RiskTier::Moderate => &MODERATE_BASE_RECOMMENDATIONS,
        RiskTier::Low => &LOW_BASE_RECOMMENDATIONS,
    };

    let mut recommendations: Vec<String> = base.iter().map(|item| item.to_string()).collect();

    if measurement.heart_rate > TACHYCARDIA_THRESHOLD_BPM {
        recommendations.push(TACHYCARDIA_ADVISORY.to_string());
    }
    if measurement.temperature > FEVER_THRESHOLD_CELSIUS {
        recommendations.push(FEVER_ADVISORY.to_string());
    }

    recommendations
}
