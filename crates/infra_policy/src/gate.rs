//! Policy gate evaluation result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::PolicyViolation;

/// Aggregated policy outcome across every resource kind.
///
/// Output generation proceeds only when `passed` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateResult {
    pub passed: bool,
    pub violations: Vec<PolicyViolation>,
}

impl GateResult {
    pub fn new() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
        }
    }

    /// Record violations from one evaluator.
    pub fn add_violations(&mut self, violations: impl IntoIterator<Item = PolicyViolation>) {
        for violation in violations {
            debug!(
                rule = %violation.rule_id,
                resource = %violation.resource,
                "Policy violation: {}",
                violation.message
            );
            self.passed = false;
            self.violations.push(violation);
        }
    }

    /// Violation messages in evaluation order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Violations raised for one resource kind.
    pub fn for_resource(&self, resource: &str) -> Vec<&PolicyViolation> {
        self.violations
            .iter()
            .filter(|v| v.resource == resource)
            .collect()
    }

    /// Bulleted, human-readable report.
    pub fn report(&self) -> String {
        if self.violations.is_empty() {
            return "All policies passed".to_string();
        }

        let mut report = String::from("Policy violations:\n");
        for violation in &self.violations {
            report.push_str(&format!("  • {}\n", violation.message));
        }
        report
    }
}

impl Default for GateResult {
    fn default() -> Self {
        Self::new()
    }
}
