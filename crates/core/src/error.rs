#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid patient_id: {0}")]
    PatientId(#[from] rsg_types::PatientIdError),
    #[error("cvd_risk_score must be within [0.0, 1.0], got {0}")]
    RiskScoreOutOfRange(f64),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
