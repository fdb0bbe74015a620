//! Dashboard session credentials.
//!
//! The clinic dashboard authenticates report uploads with a bearer token
//! issued by its own cloud. The credential here is an explicit, scoped value:
//! it is constructed once (directly or from the environment) and passed into
//! the delivery collaborator by the caller, never stored as ambient mutable
//! state and never seen by the report-generation core.

use std::env;

/// Errors that can occur when obtaining a session credential.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The token was empty or contained only whitespace
    #[error("dashboard token cannot be empty")]
    EmptyToken,
    /// The environment variable holding the token was not set
    #[error("RSG_DASHBOARD_TOKEN not set in environment")]
    MissingToken,
}

/// A validated bearer credential for the clinic dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Creates a credential from a raw token.
    ///
    /// The token is trimmed; an empty or whitespace-only token is rejected.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyToken` if the trimmed token is empty.
    pub fn new(token: impl AsRef<str>) -> Result<Self, SessionError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Reads the credential from the `RSG_DASHBOARD_TOKEN` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingToken` if the variable is unset, or
    /// `SessionError::EmptyToken` if it is set but blank.
    pub fn from_env() -> Result<Self, SessionError> {
        let token = env::var("RSG_DASHBOARD_TOKEN").map_err(|_| SessionError::MissingToken)?;
        Self::new(token)
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Renders the credential as an HTTP `Authorization` header value.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_token() {
        let credential = SessionCredential::new("  tok-123  ").unwrap();
        assert_eq!(credential.token(), "tok-123");
    }

    #[test]
    fn test_new_rejects_empty_token() {
        match SessionCredential::new("   ") {
            Err(SessionError::EmptyToken) => {}
            other => panic!("Expected EmptyToken, got {:?}", other),
        }
    }

    #[test]
    fn test_bearer_header_format() {
        let credential = SessionCredential::new("tok-123").unwrap();
        assert_eq!(credential.bearer_header(), "Bearer tok-123");
    }
}
