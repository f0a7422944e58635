//! Application service — module teardown use-cases.
//!
//! A full teardown is three independent stages run in a fixed order:
//! deactivate for the tenant, remove from the proxy, undeploy instances.
//! No stage's failure stops a later one and nothing is retried or rolled back.

use crate::application::ports::{GatewayApi, ProgressReporter};
use crate::domain::gateway::{STATUS_NO_CONTENT, STATUS_OK, endpoints, parse_instances};
use crate::domain::{
    ApiResponse, CallFailure, GatewayError, InstanceRecord, ModuleId, Outcome, Step, StepResult,
    TenantId, TeardownReport,
};

/// What status a call must return to count as a success.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Expect {
    Exactly(u16),
    AnySuccess,
}

impl Expect {
    fn accepts(self, response: &ApiResponse) -> bool {
        match self {
            Self::Exactly(status) => response.status == status,
            Self::AnySuccess => response.is_success(),
        }
    }
}

/// Issue one request and classify the result. Transport errors become
/// failures like any unexpected status.
pub(crate) fn call(
    gateway: &impl GatewayApi,
    reporter: &impl ProgressReporter,
    step: Step,
    method: Method,
    path: &str,
    expect: Expect,
) -> (StepResult, Option<ApiResponse>) {
    let target = gateway.url(path);
    reporter.detail(&format!("{} {target}", method.as_str()));
    let response = match method {
        Method::Get => gateway.get(path),
        Method::Delete => gateway.delete(path),
    };
    let outcome = match &response {
        Ok(resp) if expect.accepts(resp) => Outcome::Succeeded {
            status: resp.status,
        },
        Ok(resp) => Outcome::Failed(CallFailure::UnexpectedStatus {
            status: resp.status,
        }),
        Err(GatewayError::Transport { message, .. }) => Outcome::Failed(CallFailure::Transport {
            message: message.clone(),
        }),
        Err(GatewayError::Body { message, .. }) => Outcome::Failed(CallFailure::MalformedBody {
            message: message.clone(),
        }),
    };
    (
        StepResult {
            step,
            target,
            outcome,
        },
        response.ok(),
    )
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Method {
    Get,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Delete => "DELETE",
        }
    }
}

/// Run the full teardown for `module` on `tenant`.
pub fn teardown(
    gateway: &impl GatewayApi,
    module: &ModuleId,
    tenant: &TenantId,
    reporter: &impl ProgressReporter,
) -> TeardownReport {
    let mut report = TeardownReport::new();
    report.push(deactivate_for_tenant(gateway, module, tenant, reporter));
    report.push(remove_from_proxy(gateway, module, reporter));
    report.extend(undeploy_instances(gateway, module, reporter));
    report
}

/// Stage 1: drop the tenant's activation of the module. Expects 204.
pub fn deactivate_for_tenant(
    gateway: &impl GatewayApi,
    module: &ModuleId,
    tenant: &TenantId,
    reporter: &impl ProgressReporter,
) -> StepResult {
    reporter.step(&format!("Deactivating {module} for tenant {tenant}..."));
    let (result, _) = call(
        gateway,
        reporter,
        Step::DeactivateTenant,
        Method::Delete,
        &endpoints::tenant_module(tenant, module),
        Expect::Exactly(STATUS_NO_CONTENT),
    );
    match &result.outcome {
        Outcome::Succeeded { .. } => {
            reporter.success(&format!("Module {module} deactivated for tenant {tenant}"));
        }
        Outcome::Failed(failure) => reporter.warn(&format!(
            "Failed to deactivate {module} for tenant {tenant}: {failure} ({})",
            result.target
        )),
    }
    result
}

/// Stage 2: remove the module from the proxy registry. Expects 204.
pub fn remove_from_proxy(
    gateway: &impl GatewayApi,
    module: &ModuleId,
    reporter: &impl ProgressReporter,
) -> StepResult {
    reporter.step(&format!("Removing {module} from proxy..."));
    let (result, _) = call(
        gateway,
        reporter,
        Step::RemoveFromProxy,
        Method::Delete,
        &endpoints::proxy_module(module),
        Expect::Exactly(STATUS_NO_CONTENT),
    );
    match &result.outcome {
        Outcome::Succeeded { .. } => {
            reporter.success(&format!("Module {module} removed from proxy"));
        }
        Outcome::Failed(failure) => reporter.warn(&format!(
            "Failed to remove {module} from proxy: {failure} ({})",
            result.target
        )),
    }
    result
}

/// Stage 3 (also the instance-only undeploy): list the module's running
/// instances and delete each one.
///
/// A failed listing is reported and treated as zero instances.
pub fn undeploy_instances(
    gateway: &impl GatewayApi,
    module: &ModuleId,
    reporter: &impl ProgressReporter,
) -> TeardownReport {
    let mut report = TeardownReport::new();
    reporter.step(&format!("Looking up running instances of {module}..."));
    let (listed, instances) = list_instances(gateway, module, reporter);
    let listed_ok = listed.outcome.is_success();
    report.push(listed);

    if instances.is_empty() {
        if listed_ok {
            reporter.step(&format!("No instances of {module} to undeploy"));
        }
        return report;
    }

    for instance in &instances {
        report.push(delete_instance(gateway, module, &instance.inst_id, reporter));
    }
    report
}

fn list_instances(
    gateway: &impl GatewayApi,
    module: &ModuleId,
    reporter: &impl ProgressReporter,
) -> (StepResult, Vec<InstanceRecord>) {
    let (mut result, response) = call(
        gateway,
        reporter,
        Step::ListInstances,
        Method::Get,
        &endpoints::discovery_module(module),
        Expect::Exactly(STATUS_OK),
    );

    let instances = match response {
        Some(resp) if result.outcome.is_success() => match parse_instances(&resp.body) {
            Ok(instances) => instances,
            Err(message) => {
                result.outcome = Outcome::Failed(CallFailure::MalformedBody { message });
                Vec::new()
            }
        },
        _ => Vec::new(),
    };

    if let Outcome::Failed(failure) = &result.outcome {
        reporter.warn(&format!(
            "Could not list instances of {module}: {failure} ({})",
            result.target
        ));
    }
    (result, instances)
}

fn delete_instance(
    gateway: &impl GatewayApi,
    module: &ModuleId,
    instance: &str,
    reporter: &impl ProgressReporter,
) -> StepResult {
    let (result, _) = call(
        gateway,
        reporter,
        Step::DeleteInstance,
        Method::Delete,
        &endpoints::discovery_instance(module, instance),
        Expect::AnySuccess,
    );
    match &result.outcome {
        Outcome::Succeeded { status } => reporter.success(&format!(
            "Undeployed instance {instance} of {module} (status {status})"
        )),
        Outcome::Failed(failure) => reporter.warn(&format!(
            "Failed to undeploy instance {instance} of {module}: {failure}"
        )),
    }
    result
}
