//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Failures from the remote ledger service are always mapped into one of
/// these variants at the call site; "no data found" is never expressed as
/// an error, because an empty state and a failed fetch require different
/// UI treatment.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local pre-submit validation failed; no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication failed (invalid credentials, unverified email).
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The session token is no longer valid; the user must sign in again.
    #[error("Session expired")]
    SessionExpired,

    /// A record that was expected to exist could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The remote ledger service answered, but the query itself failed.
    #[error("Upstream data error: {0}")]
    Upstream(String),

    /// The remote ledger service could not be reached (network/timeout).
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns a stable error code for UI-level dispatch.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Upstream(_) => "UPSTREAM_DATA_ERROR",
            Self::Unavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the failed operation may be retried automatically.
    ///
    /// Only transport-level unavailability qualifies, and callers must
    /// additionally restrict retries to idempotent reads.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Returns true if the caller should redirect to sign-in.
    #[must_use]
    pub const fn requires_sign_in(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Unauthorized(String::new()).error_code(),
            "UNAUTHORIZED"
        );
        assert_eq!(AppError::SessionExpired.error_code(), "SESSION_EXPIRED");
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Upstream(String::new()).error_code(),
            "UPSTREAM_DATA_ERROR"
        );
        assert_eq!(
            AppError::Unavailable(String::new()).error_code(),
            "UPSTREAM_UNAVAILABLE"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_only_unavailable_is_retryable() {
        assert!(AppError::Unavailable(String::new()).is_retryable());
        assert!(!AppError::Upstream(String::new()).is_retryable());
        assert!(!AppError::Validation(String::new()).is_retryable());
        assert!(!AppError::SessionExpired.is_retryable());
        assert!(!AppError::NotFound(String::new()).is_retryable());
    }

    #[test]
    fn test_session_expiry_requires_sign_in() {
        assert!(AppError::SessionExpired.requires_sign_in());
        assert!(!AppError::Unauthorized(String::new()).requires_sign_in());
        assert!(!AppError::Unavailable(String::new()).requires_sign_in());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("bad date".into()).to_string(),
            "Validation error: bad date"
        );
        assert_eq!(
            AppError::Unavailable("timeout".into()).to_string(),
            "Upstream unavailable: timeout"
        );
        assert_eq!(AppError::SessionExpired.to_string(), "Session expired");
    }
}
