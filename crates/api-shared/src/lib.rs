//! # API Shared
//!
//! Shared utilities and definitions for the RSG API surface and its external
//! collaborators.
//!
//! Contains:
//! - Shared services like `HealthService`
//! - The dashboard session credential (bearer token as an explicit value)
//! - The `ReportSink` delivery contract consumed by callers that forward
//!   finished reports to a clinic dashboard
//!
//! Used by `api-rest` and by delivery-collaborator implementations.

pub mod delivery;
pub mod health;
pub mod session;

pub use delivery::{DeliveryError, ReportSink};
pub use health::{HealthRes, HealthService};
pub use session::{SessionCredential, SessionError};
