//! Policy violations.

use serde::{Deserialize, Serialize};

/// Rule severity levels.
///
/// Both levels block transformation; the distinction is only reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleSeverity {
    /// A hard requirement ("requires ...").
    Error,
    /// A recommendation ("recommends ...").
    Warning,
}

/// A configuration that is disallowed for the acting role and environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyViolation {
    pub rule_id: String,
    /// Resource kind the rule belongs to, e.g. `postgresql`.
    pub resource: String,
    pub severity: RuleSeverity,
    pub message: String,
}

impl PolicyViolation {
    pub fn new(
        rule_id: impl Into<String>,
        resource: impl Into<String>,
        severity: RuleSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            resource: resource.into(),
            severity,
            message: message.into(),
        }
    }

    pub fn error(
        rule_id: impl Into<String>,
        resource: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(rule_id, resource, RuleSeverity::Error, message)
    }

    pub fn warning(
        rule_id: impl Into<String>,
        resource: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(rule_id, resource, RuleSeverity::Warning, message)
    }
}

impl std::fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let v = PolicyViolation::warning("st-production-tier", "storage", "Use standard tier");
        assert_eq!(v.to_string(), "Use standard tier");
        assert_eq!(v.severity, RuleSeverity::Warning);
    }
}
