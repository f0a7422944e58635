//! Application service — gateway environment cleanup use-case.

use crate::application::ports::{GatewayApi, ProgressReporter};
use crate::application::services::teardown::{Expect, Method, call};
use crate::domain::gateway::{STATUS_OK, endpoints, parse_env_entries};
use crate::domain::{CallFailure, CleanupReport, Outcome, Step};

/// Delete every environment variable the gateway holds.
///
/// Names are deleted once each, in the order the listing returns them. When
/// the listing fails nothing is deleted.
pub fn clean_environment(
    gateway: &impl GatewayApi,
    reporter: &impl ProgressReporter,
) -> CleanupReport {
    let mut report = CleanupReport::new();
    reporter.step("Listing gateway environment variables...");
    let (mut listed, response) = call(
        gateway,
        reporter,
        Step::ListEnv,
        Method::Get,
        &endpoints::env_list(),
        Expect::Exactly(STATUS_OK),
    );

    let entries = match response {
        Some(resp) if listed.outcome.is_success() => match parse_env_entries(&resp.body) {
            Ok(entries) => entries,
            Err(message) => {
                listed.outcome = Outcome::Failed(CallFailure::MalformedBody { message });
                Vec::new()
            }
        },
        _ => Vec::new(),
    };

    if let Outcome::Failed(failure) = &listed.outcome {
        reporter.warn(&format!(
            "Could not list environment variables: {failure} ({})",
            listed.target
        ));
        report.push(listed);
        return report;
    }
    report.push(listed);

    if entries.is_empty() {
        reporter.step("No environment variables to delete");
    }

    for entry in &entries {
        let (result, _) = call(
            gateway,
            reporter,
            Step::DeleteEnv,
            Method::Delete,
            &endpoints::env_entry(&entry.name),
            Expect::AnySuccess,
        );
        match &result.outcome {
            Outcome::Succeeded { status } => {
                reporter.success(&format!("Deleted {} (status {status})", entry.name));
            }
            Outcome::Failed(failure) => {
                reporter.warn(&format!("Failed to delete {}: {failure}", entry.name));
            }
        }
        report.push(result);
    }
    report
}
