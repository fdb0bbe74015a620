//! # RSG Core
//!
//! Report-generation decision logic for the Retinal Screening Gateway.
//!
//! This crate contains the only decision rules in the repository: the
//! deterministic mapping from a device-uploaded screening measurement to a
//! structured clinical report — risk tier, urgency, lay explanation,
//! recommendations, and follow-up interval.
//!
//! Everything here is pure and synchronous. The single resource the crate
//! isolates is the clock used for the report timestamp, injected through the
//! [`Clock`] trait.
//!
//! **No API concerns**: HTTP endpoints, dashboard session credentials, and
//! report delivery belong in `api-rest` and `api-shared`.

pub mod clock;
pub mod constants;
pub mod error;
pub mod generator;
pub mod measurement;
pub mod recommendations;
pub mod report;
pub mod risk;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ReportError, ReportResult};
pub use generator::ReportGenerator;
pub use measurement::ScreeningMeasurement;
pub use recommendations::recommendations_for;
pub use report::{Report, VitalSigns};
pub use risk::{RiskTier, Urgency};

// Re-export the validated identifier so downstream crates don't need a direct
// rsg-types dependency just to name it.
pub use rsg_types::PatientId;
