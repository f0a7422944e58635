//! Per-call outcomes and the reports teardown procedures return.
//!
//! A report lists every remote call in the order it was made. Failures are
//! data here, never errors: nothing in a report aborts a run.

use std::fmt;

/// Which remote call a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    DeactivateTenant,
    RemoveFromProxy,
    ListInstances,
    DeleteInstance,
    ListEnv,
    DeleteEnv,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DeactivateTenant => "deactivate for tenant",
            Self::RemoveFromProxy => "remove from proxy",
            Self::ListInstances => "list instances",
            Self::DeleteInstance => "undeploy instance",
            Self::ListEnv => "list environment",
            Self::DeleteEnv => "delete environment variable",
        };
        f.write_str(label)
    }
}

/// Why a remote call did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    UnexpectedStatus { status: u16 },
    Transport { message: String },
    MalformedBody { message: String },
}

impl fmt::Display for CallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedStatus { status } => write!(f, "status {status}"),
            Self::Transport { message } => write!(f, "no response ({message})"),
            Self::MalformedBody { message } => write!(f, "unreadable response ({message})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded { status: u16 },
    Failed(CallFailure),
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// One remote call: what it was for, what it targeted, how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub step: Step,
    /// Full URL the call was made against.
    pub target: String,
    pub outcome: Outcome,
}

/// Ordered record of the calls made by one procedure run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    results: Vec<StepResult>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: StepResult) {
        self.results.push(result);
    }

    pub fn extend(&mut self, other: Report) {
        self.results.extend(other.results);
    }

    #[must_use]
    pub fn results(&self) -> &[StepResult] {
        &self.results
    }

    /// Results for one kind of call, in call order.
    pub fn of(&self, step: Step) -> impl Iterator<Item = &StepResult> {
        self.results.iter().filter(move |r| r.step == step)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.results.iter().filter(|r| !r.outcome.is_success())
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// One-line summary such as `5 calls, 1 failed`.
    #[must_use]
    pub fn summary(&self) -> String {
        let failed = self.failures().count();
        let total = self.results.len();
        let noun = if total == 1 { "call" } else { "calls" };
        format!("{total} {noun}, {failed} failed")
    }
}

/// Result of a full or instance-only teardown.
pub type TeardownReport = Report;
/// Result of an environment cleanup.
pub type CleanupReport = Report;
