//! Module and tenant identifiers.
//!
//! Both are opaque strings to the gateway, but they are interpolated into
//! URL paths, so they may not be empty and may not contain `/` or whitespace.

use std::fmt;

use crate::domain::error::InputError;

fn validate(kind: &'static str, raw: &str) -> Result<String, InputError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InputError::EmptyIdentifier { kind });
    }
    if value.contains('/') || value.chars().any(char::is_whitespace) {
        return Err(InputError::InvalidIdentifier {
            kind,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Identifier of a deployable module, e.g. `mod-inventory-storage-19.1.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId(String);

impl ModuleId {
    /// Parse and validate a module identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or not a single path segment.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        validate("module id", raw).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a tenant scope, e.g. `diku`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantId(String);

impl TenantId {
    /// Parse and validate a tenant identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or not a single path segment.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        validate("tenant id", raw).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
