//! Domain-level errors.
//!
//! These errors represent business rule violations detected before any
//! collaborator is contacted. They are independent of presentation concerns.

use serde::Serialize;
use thiserror::Error;

/// Cause blocking a signup submission, determined before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// A required field (name, email, password, confirmation or role) is empty
    #[error("Required fields are missing")]
    MissingFields,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password does not satisfy every strength criterion
    #[error("Password does not meet the strength criteria")]
    WeakPassword,
}

impl FailureReason {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::MissingFields => "MISSING_FIELDS",
            FailureReason::PasswordMismatch => "PASSWORD_MISMATCH",
            FailureReason::WeakPassword => "WEAK_PASSWORD",
        }
    }
}

/// Domain-specific errors for malformed input values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role value is not one of the known roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

impl DomainError {
    /// Create an unknown role error
    pub fn unknown_role(value: impl Into<String>) -> Self {
        DomainError::UnknownRole(value.into())
    }
}
