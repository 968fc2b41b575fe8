//! Common utilities shared across the signup crates.
//!
//! This crate provides:
//! - The signup error taxonomy and the authentication fault type
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AuthError, AuthResult, SignupError};
