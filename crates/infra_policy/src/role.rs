//! Acting user roles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// User roles for policy enforcement, ordered by privilege.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Developer,
    TeamLead,
    PlatformAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Developer => "developer",
            UserRole::TeamLead => "team_lead",
            UserRole::PlatformAdmin => "platform_admin",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![UserRole::Developer, UserRole::TeamLead, UserRole::PlatformAdmin]
    }

    /// Roles above developer may approve premium and public resources.
    pub fn is_elevated(&self) -> bool {
        *self >= UserRole::TeamLead
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "developer" => Ok(UserRole::Developer),
            "team_lead" => Ok(UserRole::TeamLead),
            "platform_admin" => Ok(UserRole::PlatformAdmin),
            _ => Err(PolicyError::UnknownRole(s.to_string())),
        }
    }
}
