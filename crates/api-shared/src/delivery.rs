//! Report delivery contract.
//!
//! Outbound transmission of finished reports is owned by an external
//! collaborator (the clinic dashboard client), not by this repository. This
//! module defines the seam: a sink takes an explicit session credential and a
//! serialized report, and answers whether the dashboard accepted it. Retry
//! policy belongs entirely to the caller — report generation never retries.

use crate::session::{SessionCredential, SessionError};

/// Errors surfaced by a delivery collaborator.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The dashboard answered with a non-success status
    #[error("dashboard rejected report with HTTP status {0}")]
    Rejected(u16),
    /// The report never reached the dashboard
    #[error("transport failure: {0}")]
    Transport(String),
    /// No usable session credential was available
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

/// A destination that accepts serialized screening reports.
///
/// Success is determined purely by the collaborator's response status: `true`
/// means the dashboard acknowledged the report, `false` or an error means the
/// caller decides what happens next.
pub trait ReportSink {
    /// Sends one serialized report to the dashboard.
    ///
    /// # Arguments
    ///
    /// * `credential` - The session credential authorising the upload.
    /// * `report` - The serialized report document.
    ///
    /// # Errors
    ///
    /// Returns a `DeliveryError` if the upload could not be attempted or was
    /// rejected outright.
    fn send(
        &self,
        credential: &SessionCredential,
        report: &serde_json::Value,
    ) -> Result<bool, DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Sink that records every delivered document.
    struct RecordingSink {
        delivered: RefCell<Vec<serde_json::Value>>,
        accept: bool,
    }

    impl RecordingSink {
        fn new(accept: bool) -> Self {
            Self {
                delivered: RefCell::new(Vec::new()),
                accept,
            }
        }
    }

    impl ReportSink for RecordingSink {
        fn send(
            &self,
            credential: &SessionCredential,
            report: &serde_json::Value,
        ) -> Result<bool, DeliveryError> {
            assert!(credential.bearer_header().starts_with("Bearer "));
            self.delivered.borrow_mut().push(report.clone());
            Ok(self.accept)
        }
    }

    #[test]
    fn test_sink_receives_serialized_report() {
        let sink = RecordingSink::new(true);
        let credential = SessionCredential::new("tok-123").unwrap();
        let report = serde_json::json!({"patient_id": "P001", "risk_level": "HIGH"});

        let accepted = sink.send(&credential, &report).unwrap();

        assert!(accepted);
        assert_eq!(sink.delivered.borrow().len(), 1);
        assert_eq!(sink.delivered.borrow()[0]["risk_level"], "HIGH");
    }

    #[test]
    fn test_sink_can_refuse_without_error() {
        let sink = RecordingSink::new(false);
        let credential = SessionCredential::new("tok-123").unwrap();
        let report = serde_json::json!({"patient_id": "P001"});

        let accepted = sink.send(&credential, &report).unwrap();

        assert!(!accepted);
    }

    #[test]
    fn test_delivery_error_wraps_session_error() {
        let err = DeliveryError::from(SessionError::EmptyToken);
        assert!(err.to_string().contains("session error"));
    }
}
