//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::{ApiResponse, GatewayError, TeardownConfig};

// ── Gateway Port ──────────────────────────────────────────────────────────────

/// Blocking access to the gateway's admin API.
///
/// Any completed HTTP exchange is `Ok`, whatever its status. `Err` means no
/// status was obtained (connection refused, timeout, unreadable body).
pub trait GatewayApi {
    /// Issue a `GET` against an absolute admin path such as `/_/env`.
    fn get(&self, path: &str) -> Result<ApiResponse, GatewayError>;
    /// Issue a `DELETE` against an absolute admin path.
    fn delete(&self, path: &str) -> Result<ApiResponse, GatewayError>;
    /// Full URL for a path, used in reports and messages.
    fn url(&self, path: &str) -> String;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a non-fatal failure message.
    fn warn(&self, message: &str);
    /// Emit a low-level detail such as the request line. Hidden unless verbose.
    fn detail(&self, _message: &str) {}
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the configuration file.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<TeardownConfig>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Descriptor Port ───────────────────────────────────────────────────────────

/// Abstracts reading the module descriptor file.
pub trait DescriptorSource {
    /// Read the raw descriptor content at `path`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn read(&self, path: &Path) -> Result<Option<String>>;
}
