//! Platform roles a new member can pick when signing up.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_EMPLOYER, ROLE_INFORMATION_SEEKER, ROLE_MERCHANT, ROLE_SHOWBIZ};
use crate::error::DomainError;

/// Why a member joins the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    InformationSeeker,
    Merchant,
    Employer,
    Showbiz,
}

impl Role {
    /// Every role, in the order the picker lists them
    pub const ALL: [Role; 4] = [
        Role::InformationSeeker,
        Role::Merchant,
        Role::Employer,
        Role::Showbiz,
    ];

    /// Wire value sent to the authentication service
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::InformationSeeker => ROLE_INFORMATION_SEEKER,
            Role::Merchant => ROLE_MERCHANT,
            Role::Employer => ROLE_EMPLOYER,
            Role::Showbiz => ROLE_SHOWBIZ,
        }
    }

    /// Display label shown in the role picker
    pub fn label(&self) -> &'static str {
        match self {
            Role::InformationSeeker => "Visiteur",
            Role::Merchant => "Commerçant",
            Role::Employer => "Employeur",
            Role::Showbiz => "Show business",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::unknown_role(s))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_valid_role() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert_eq!(err, DomainError::UnknownRole("admin".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Merchant".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::Merchant.label(), "Commerçant");
        assert_eq!(Role::Showbiz.label(), "Show business");
    }

    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&Role::InformationSeeker).unwrap();
        assert_eq!(json, "\"information_seeker\"");
        let role: Role = serde_json::from_str("\"employer\"").unwrap();
        assert_eq!(role, Role::Employer);
    }
}
