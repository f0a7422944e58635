//! Module descriptor parsing.

use serde::Deserialize;

use crate::domain::error::DescriptorError;

/// Default descriptor location, relative to the working directory.
pub const DEFAULT_DESCRIPTOR_PATH: &str = "target/ModuleDescriptor.json";

/// The subset of a module descriptor this tool reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Parse descriptor JSON. `origin` names the file in error messages.
///
/// # Errors
///
/// Returns an error if the content is not JSON or has no string `id`.
pub fn parse_descriptor(content: &str, origin: &str) -> Result<ModuleDescriptor, DescriptorError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| DescriptorError::Malformed {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
    if !value.get("id").is_some_and(serde_json::Value::is_string) {
        return Err(DescriptorError::MissingId(origin.to_string()));
    }
    serde_json::from_value(value).map_err(|e| DescriptorError::Malformed {
        path: origin.to_string(),
        reason: e.to_string(),
    })
}
