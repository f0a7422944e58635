//! Filesystem infrastructure — implements `DescriptorSource`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::DescriptorSource;

/// Reads module descriptors from the local filesystem.
pub struct FsDescriptorSource;

impl DescriptorSource for FsDescriptorSource {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("reading {}", path.display()))
    }
}
