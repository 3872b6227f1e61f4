//! Azure resource naming.
//!
//! PostgreSQL server names: 3-63 characters, lowercase letters, digits, and
//! hyphens, starting with a letter. Storage account names: 3-24 characters,
//! lowercase letters and digits only, globally unique (not checked here).

/// Maximum PostgreSQL Flexible Server name length.
pub const DATABASE_NAME_MAX_LEN: usize = 63;

/// Maximum storage account name length.
pub const STORAGE_NAME_MAX_LEN: usize = 24;

const DATABASE_NAME_PREFIX: &str = "psql-";
const STORAGE_NAME_PREFIX: &str = "st";

/// Server name for a project's PostgreSQL instance.
pub fn database_server_name(project: &str, environment: &str) -> String {
    sanitize_database_name(&format!("{}{}-{}", DATABASE_NAME_PREFIX, project, environment))
}

/// Coerce any string into a valid PostgreSQL server name shape.
pub fn sanitize_database_name(raw: &str) -> String {
    let mut name: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        name.insert_str(0, DATABASE_NAME_PREFIX);
    }

    // ascii only at this point
    name.truncate(DATABASE_NAME_MAX_LEN);
    name
}

/// Account name for a project's storage account. Hyphens are not allowed.
pub fn storage_account_name(project: &str, environment: &str) -> String {
    let mut name = format!(
        "{}{}{}",
        STORAGE_NAME_PREFIX,
        strip_non_alphanumeric(project),
        strip_non_alphanumeric(environment)
    );
    name.truncate(STORAGE_NAME_MAX_LEN);
    name
}

/// Lowercase and drop everything outside `[a-z0-9]`.
pub fn strip_non_alphanumeric(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
