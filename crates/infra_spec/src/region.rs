//! Azure region allow-list.

/// Region used when the configuration does not name one.
pub const DEFAULT_REGION: &str = "eastus";

/// Regions a configuration may target, in lowercase.
pub const AZURE_REGIONS: &[&str] = &[
    "australiaeast",
    "australiasoutheast",
    "centralus",
    "eastasia",
    "eastus",
    "eastus2",
    "northeurope",
    "southeastasia",
    "uksouth",
    "ukwest",
    "westeurope",
    "westus",
    "westus2",
    "westus3",
];

/// Check a region name against the allow-list, ignoring case.
pub fn is_valid_region(region: &str) -> bool {
    let normalized = region.to_lowercase();
    AZURE_REGIONS.contains(&normalized.as_str())
}
