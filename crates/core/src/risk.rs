//! Risk classification rules.
//!
//! The cardiovascular risk score arrives from the device as a continuous value
//! in [0.0, 1.0]; this module buckets it into the three-tier classification
//! that drives everything else in a report. Urgency, follow-up interval, and
//! the lay explanation are total functions of the tier, written as exhaustive
//! matches so a new tier cannot be added without the compiler pointing at
//! every rule that must be extended.

use crate::constants::{HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD};
use crate::validation::validate_risk_score;
use crate::ReportResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discrete severity bucket derived from the continuous risk score.
///
/// Ordered by severity: `Low < Moderate < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// Clinical-workflow label paired one-to-one with a risk tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Routine,
    Standard,
    Urgent,
}

impl RiskTier {
    /// Classifies a cardiovascular risk score into a tier.
    ///
    /// Thresholds are strict lower bounds evaluated highest-first, so the
    /// first match wins: scores above 0.7 are HIGH, scores above 0.4 are
    /// MODERATE, everything else is LOW. Exactly 0.7 is MODERATE and exactly
    /// 0.4 is LOW.
    ///
    /// # Arguments
    ///
    /// * `risk_score` - Device-computed score, must be within [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RiskScoreOutOfRange` if the score is outside
    /// its domain; classification never runs on an invalid score.
    pub fn classify(risk_score: f64) -> ReportResult<Self> {
        validate_risk_score(risk_score)?;

        if risk_score > HIGH_RISK_THRESHOLD {
            Ok(Self::High)
        } else if risk_score > MODERATE_RISK_THRESHOLD {
            Ok(Self::Moderate)
        } else {
            Ok(Self::Low)
        }
    }

    /// Returns the clinical-workflow urgency paired with this tier.
    pub fn urgency(self) -> Urgency {
        match self {
            Self::High => Urgency::Urgent,
            Self::Moderate => Urgency::Standard,
            Self::Low => Urgency::Routine,
        }
    }

    /// Returns the recommended number of days until the next screening.
    pub fn followup_days(self) -> u32 {
        match self {
            Self::High => 7,
            Self::Moderate => 28,
            Self::Low => 365,
        }
    }

    /// Returns the fixed lay-audience explanation paragraph for this tier.
    pub fn clinical_explanation(self) -> &'static str {
        match self {
            Self::High => {
                "Your retinal images show signs associated with cardiovascular \
                 disease risk. Blood vessels in the eye show changes that correlate \
                 with heart and blood pressure problems. This does not mean you \
                 definitely have heart disease, but it indicates a higher risk. \
                 We recommend urgent follow-up with a cardiologist for further testing."
            }
            Self::Moderate => {
                "Your screening shows moderate cardiovascular risk. While not urgent, \
                 we recommend lifestyle modifications and follow-up with a doctor \
                 within 4 weeks. Regular exercise, healthy diet, and stress management \
                 can significantly reduce your risk."
            }
            Self::Low => {
                "Your screening indicates low cardiovascular risk. Continue your \
                 current healthy lifestyle habits. Regular exercise, balanced diet, \
                 and annual health checkups help maintain good cardiovascular health."
            }
        }
    }

    /// Returns the tier's wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl Urgency {
    /// Returns the urgency's wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Routine => "ROUTINE",
            Self::Standard => "STANDARD",
            Self::Urgent => "URGENT",
        }
    }
}
