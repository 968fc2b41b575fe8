//! Unified error handling for the signup flow.
//!
//! Every error here is recovered inside the flow and turned into a
//! user-facing notice; none of them escape the signup screen. Fault detail
//! only goes to logs.

use domain::FailureReason;
use thiserror::Error;

/// Faults raised by the authentication collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),

    #[error("Authentication service error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        AuthError::Unavailable(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AuthError::Internal(msg.into())
    }
}

/// Result type alias for authentication calls
pub type AuthResult<T> = Result<T, AuthError>;

/// Every way a signup attempt can end without creating an account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    // Validation
    #[error("Required fields are missing")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password does not meet the strength criteria")]
    WeakPassword,

    // Authentication service
    #[error("Signup rejected by the authentication service")]
    SignupRejected,

    #[error("Signup failed: {0}")]
    SignupFault(String),
}

impl SignupError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            SignupError::MissingFields => "MISSING_FIELDS",
            SignupError::PasswordMismatch => "PASSWORD_MISMATCH",
            SignupError::WeakPassword => "WEAK_PASSWORD",
            SignupError::SignupRejected => "SIGNUP_REJECTED",
            SignupError::SignupFault(_) => "SIGNUP_FAULT",
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<FailureReason> for SignupError {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::MissingFields => SignupError::MissingFields,
            FailureReason::PasswordMismatch => SignupError::PasswordMismatch,
            FailureReason::WeakPassword => SignupError::WeakPassword,
        }
    }
}

impl From<AuthError> for SignupError {
    fn from(err: AuthError) -> Self {
        SignupError::SignupFault(err.to_string())
    }
}
