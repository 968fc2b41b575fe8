//! Signup flow configuration.

use std::env;

use serde::{Deserialize, Serialize};

use domain::HOME_PATH;

/// Signup flow configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignupConfig {
    /// Destination after a successful signup
    pub home_path: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Whether the bundled in-memory auth backend accepts calls
    pub auth_available: bool,
}

impl SignupConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            home_path: env::var("SIGNUP_HOME_PATH").unwrap_or(defaults.home_path),
            log_level: env::var("SIGNUP_LOG_LEVEL").unwrap_or(defaults.log_level),
            auth_available: env::var("SIGNUP_AUTH_AVAILABLE")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.auth_available),
        }
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            home_path: HOME_PATH.to_string(),
            log_level: "info".to_string(),
            auth_available: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
