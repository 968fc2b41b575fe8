//! Domain layer - Signup form state, roles and validation rules.
//!
//! This crate contains pure domain logic with no I/O. Everything here can be
//! exercised without a runtime, a renderer or an authentication backend.

pub mod constants;
pub mod error;
pub mod form;
pub mod password;
pub mod role;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, FailureReason};
pub use form::{FormEvent, PasswordInput, SignupForm};
pub use password::{criteria_report, strength, CriterionStatus, PasswordCriterion, StrengthMeter};
pub use role::Role;
pub use validation::{validate, ValidSignup};
