//! The screening measurement uploaded by the imaging device.

use crate::ReportResult;
use rsg_types::PatientId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single cardiovascular screening measurement.
///
/// This is the input contract of the gateway: exactly these five fields, all
/// required, no defaults. The risk score is computed on-device from the
/// retinal images and arrives here pre-computed; the vital signs are raw
/// sensor readings taken during the same session.
///
/// Implausible vital-sign values (for example a heart rate of 20 bpm) are
/// accepted rather than rejected; the recommendation rules flag them instead.
/// Only the risk score has a hard domain, enforced at report generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ScreeningMeasurement {
    /// Opaque, non-empty patient identifier.
    #[schema(value_type = String)]
    pub patient_id: PatientId,
    /// Device-computed cardiovascular risk score in [0.0, 1.0].
    pub cvd_risk_score: f64,
    /// Heart rate in beats per minute.
    pub heart_rate: u16,
    /// Blood oxygen saturation in percent.
    pub blood_oxygen: f64,
    /// Body temperature in degrees Celsius.
    pub temperature: f64,
    /// Systolic blood pressure in mmHg.
    pub blood_pressure_systolic: f64,
}

impl ScreeningMeasurement {
    /// Builds a measurement from raw parts, validating the patient identifier.
    ///
    /// The risk score domain is checked later, at classification time, so a
    /// measurement with an out-of-range score can still be constructed and
    /// carried to `ReportGenerator::generate`, which rejects it atomically.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::PatientId` if the identifier is empty or
    /// whitespace-only.
    pub fn new(
        patient_id: impl AsRef<str>,
        cvd_risk_score: f64,
        heart_rate: u16,
        blood_oxygen: f64,
        temperature: f64,
        blood_pressure_systolic: f64,
    ) -> ReportResult<Self> {
        Ok(Self {
            patient_id: PatientId::new(patient_id)?,
            cvd_risk_score,
            heart_rate,
            blood_oxygen,
            temperature,
            blood_pressure_systolic,
        })
    }
}
