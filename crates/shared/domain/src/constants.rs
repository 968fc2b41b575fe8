//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Visitors looking for information, events and opportunities
pub const ROLE_INFORMATION_SEEKER: &str = "information_seeker";

/// Local merchants selling on the marketplace
pub const ROLE_MERCHANT: &str = "merchant";

/// Employers publishing job offers
pub const ROLE_EMPLOYER: &str = "employer";

/// Show business professionals
pub const ROLE_SHOWBIZ: &str = "showbiz";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in UTF-16 code units)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Number of segments in the password strength meter
pub const STRENGTH_SEGMENTS: usize = 4;

// =============================================================================
// Navigation
// =============================================================================

/// Destination reached after a successful signup
pub const HOME_PATH: &str = "/";
