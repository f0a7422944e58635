//! Domain layer — pure types, validation, and wire formats.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod gateway;
pub mod ids;
pub mod outcome;

pub use config::{TeardownConfig, validate_config};
pub use error::{ConfigError, DescriptorError, GatewayError, InputError};
pub use gateway::{ApiResponse, EnvEntry, GatewayAddress, InstanceRecord};
pub use ids::{ModuleId, TenantId};
pub use outcome::{CallFailure, CleanupReport, Outcome, Report, Step, StepResult, TeardownReport};
