//! Password strength checklist.
//!
//! The same four criteria drive both the live checklist shown under the
//! password field and the gate applied on submission.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{MIN_PASSWORD_LENGTH, STRENGTH_SEGMENTS};

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid regex"));

/// One independent password-strength predicate.
#[derive(Clone, Copy)]
pub struct PasswordCriterion {
    /// Checklist line shown to the user
    pub description: &'static str,
    predicate: fn(&str) -> bool,
}

impl PasswordCriterion {
    /// Evaluate this criterion against a candidate password.
    pub fn is_met(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl std::fmt::Debug for PasswordCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCriterion")
            .field("description", &self.description)
            .finish()
    }
}

/// Length is measured in UTF-16 code units, so characters outside the
/// basic multilingual plane count twice.
fn has_min_length(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    UPPERCASE.is_match(password)
}

fn has_digit(password: &str) -> bool {
    DIGIT.is_match(password)
}

fn has_special_char(password: &str) -> bool {
    SPECIAL.is_match(password)
}

/// The fixed checklist, in display order.
pub const CRITERIA: [PasswordCriterion; 4] = [
    PasswordCriterion {
        description: "Au moins 8 caractères",
        predicate: has_min_length,
    },
    PasswordCriterion {
        description: "Au moins une lettre majuscule",
        predicate: has_uppercase,
    },
    PasswordCriterion {
        description: "Au moins un chiffre",
        predicate: has_digit,
    },
    PasswordCriterion {
        description: "Au moins un caractère spécial",
        predicate: has_special_char,
    },
];

/// A criterion together with its evaluation for a given password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionStatus {
    pub description: &'static str,
    pub met: bool,
}

/// Evaluate every criterion for the checklist.
pub fn criteria_report(password: &str) -> Vec<CriterionStatus> {
    CRITERIA
        .iter()
        .map(|criterion| CriterionStatus {
            description: criterion.description,
            met: criterion.is_met(password),
        })
        .collect()
}

/// Number of satisfied criteria (0..=4).
pub fn strength(password: &str) -> usize {
    CRITERIA.iter().filter(|c| c.is_met(password)).count()
}

/// True when every criterion holds.
pub fn is_strong(password: &str) -> bool {
    CRITERIA.iter().all(|c| c.is_met(password))
}

/// Segmented strength bar: segment `n` (1-based) is lit once `n` criteria hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthMeter {
    pub score: usize,
}

impl StrengthMeter {
    pub fn for_password(password: &str) -> Self {
        Self {
            score: strength(password),
        }
    }

    pub fn segments(&self) -> [bool; STRENGTH_SEGMENTS] {
        std::array::from_fn(|i| self.score > i)
    }
}
