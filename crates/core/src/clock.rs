//! Clock abstraction for report timestamps.
//!
//! Report generation is deterministic except for the `screening_timestamp`
//! field, so the clock read is the one resource the core isolates. Injecting
//! the clock keeps `ReportGenerator` fully testable with fixed instants.

use chrono::{DateTime, Utc};

/// Source of the report generation timestamp.
pub trait Clock {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
