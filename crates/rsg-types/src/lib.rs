/// Errors that can occur when creating validated identifier types.
#[derive(Debug, thiserror::Error)]
pub enum PatientIdError {
    /// The input was empty or contained only whitespace
    #[error("patient_id cannot be empty")]
    Empty,
}

/// An opaque patient identifier that guarantees non-empty content.
///
/// Screening devices supply patient identifiers as free-form strings; this type
/// wraps the string and ensures it contains at least one non-whitespace
/// character. The input is trimmed of leading and trailing whitespace during
/// construction, so a `PatientId` never carries accidental padding into a
/// report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new `PatientId` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(PatientId)` if the trimmed input is non-empty,
    /// or `Err(PatientIdError::Empty)` if it's empty or whitespace-only.
    pub fn new(input: impl AsRef<str>) -> Result<Self, PatientIdError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PatientIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientId::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let id = PatientId::new("  P001  ").unwrap();
        assert_eq!(id.as_str(), "P001");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(PatientId::new("").is_err());
        assert!(PatientId::new("   \n  ").is_err());
    }

    #[test]
    fn test_display_matches_inner() {
        let id = PatientId::new("P-2026-0042").unwrap();
        assert_eq!(format!("{}", id), "P-2026-0042");
    }

    #[test]
    fn test_serde_round_trip() {
        let id = PatientId::new("P001").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"P001\"");

        let parsed: PatientId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<PatientId, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
