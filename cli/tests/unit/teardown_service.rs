//! Unit tests for the teardown service.
//!
//! Each test scripts the gateway's admin API and checks which calls were
//! made, in what order, and what the operator was told.

#![allow(clippy::expect_used)]

use gateway_teardown::application::services::teardown;
use gateway_teardown::domain::{
    ApiResponse, CallFailure, GatewayError, ModuleId, Outcome, Step, TenantId,
};

use crate::mocks::{Line, MockGateway, RecordingReporter, ScriptedGateway};

const MODULE: &str = "mod-inventory-storage-19.1.0";
const TENANT: &str = "diku";
const TENANT_PATH: &str = "/_/proxy/tenants/diku/modules/mod-inventory-storage-19.1.0";
const PROXY_PATH: &str = "/_/proxy/modules/mod-inventory-storage-19.1.0";
const DISCOVERY_PATH: &str = "/_/discovery/modules/mod-inventory-storage-19.1.0";

fn module() -> ModuleId {
    ModuleId::parse(MODULE).expect("module")
}

fn tenant() -> TenantId {
    TenantId::parse(TENANT).expect("tenant")
}

fn instance_path(id: &str) -> String {
    format!("{DISCOVERY_PATH}/{id}")
}

// ── Full teardown ─────────────────────────────────────────────────────────────

#[test]
fn test_teardown_runs_stages_in_fixed_order() {
    let gw = ScriptedGateway::new()
        .on_delete(TENANT_PATH, 204)
        .on_delete(PROXY_PATH, 204)
        .on_get(DISCOVERY_PATH, 200, r#"[{"instId":"i1"}]"#)
        .on_delete(&instance_path("i1"), 204);
    let reporter = RecordingReporter::new();

    let report = teardown::teardown(&gw, &module(), &tenant(), &reporter);

    assert_eq!(
        gw.calls(),
        vec![
            ("DELETE", TENANT_PATH.to_string()),
            ("DELETE", PROXY_PATH.to_string()),
            ("GET", DISCOVERY_PATH.to_string()),
            ("DELETE", instance_path("i1")),
        ]
    );
    assert!(report.is_clean());
    assert!(reporter.warnings().is_empty());
}

#[test]
fn test_deactivate_success_names_module_and_tenant_and_later_stages_still_run() {
    let gw = ScriptedGateway::new()
        .on_delete(TENANT_PATH, 204)
        .on_delete(PROXY_PATH, 404)
        .on_get(DISCOVERY_PATH, 200, "[]");
    let reporter = RecordingReporter::new();

    let report = teardown::teardown(&gw, &module(), &tenant(), &reporter);

    let first = reporter.successes().into_iter().next().expect("success line");
    assert!(first.contains(MODULE) && first.contains(TENANT), "got: {first}");
    assert_eq!(report.of(Step::RemoveFromProxy).count(), 1);
    assert_eq!(report.of(Step::ListInstances).count(), 1);
}

#[test]
fn test_failed_deactivation_does_not_block_proxy_removal_or_undeploy() {
    let gw = ScriptedGateway::new()
        .on_delete(TENANT_PATH, 404)
        .on_delete(PROXY_PATH, 204)
        .on_get(DISCOVERY_PATH, 200, r#"[{"instId":"i1"}]"#)
        .on_delete(&instance_path("i1"), 204);
    let reporter = RecordingReporter::new();

    let report = teardown::teardown(&gw, &module(), &tenant(), &reporter);

    assert_eq!(gw.deletes().len(), 3);
    let failures: Vec<_> = report.failures().map(|r| r.step).collect();
    assert_eq!(failures, [Step::DeactivateTenant]);
    let warning = &reporter.warnings()[0];
    assert!(warning.contains("404"), "status code missing: {warning}");
}

#[test]
fn test_proxy_removal_expects_no_content_exactly() {
    let gw = ScriptedGateway::new()
        .on_delete(TENANT_PATH, 204)
        .on_delete(PROXY_PATH, 200)
        .on_get(DISCOVERY_PATH, 200, "[]");
    let reporter = RecordingReporter::new();

    let report = teardown::teardown(&gw, &module(), &tenant(), &reporter);

    let proxy = report.of(Step::RemoveFromProxy).next().expect("proxy step");
    assert_eq!(
        proxy.outcome,
        Outcome::Failed(CallFailure::UnexpectedStatus { status: 200 })
    );
}

#[test]
fn test_second_run_reports_failures_but_attempts_every_stage() {
    // After a successful teardown the gateway answers 404 everywhere.
    let gw = ScriptedGateway::new()
        .on_delete(TENANT_PATH, 404)
        .on_delete(PROXY_PATH, 404)
        .on_get(DISCOVERY_PATH, 404, "");
    let reporter = RecordingReporter::new();

    let report = teardown::teardown(&gw, &module(), &tenant(), &reporter);

    assert_eq!(gw.calls().len(), 3);
    assert_eq!(report.failures().count(), 3);
    assert_eq!(reporter.warnings().len(), 3);
}

#[test]
fn test_unreachable_gateway_is_reported_per_stage() {
    let gw = ScriptedGateway::new()
        .unreachable("DELETE", TENANT_PATH)
        .unreachable("DELETE", PROXY_PATH)
        .unreachable("GET", DISCOVERY_PATH);
    let reporter = RecordingReporter::new();

    let report = teardown::teardown(&gw, &module(), &tenant(), &reporter);

    assert_eq!(gw.calls().len(), 3);
    assert!(
        report
            .failures()
            .all(|r| matches!(r.outcome, Outcome::Failed(CallFailure::Transport { .. })))
    );
}

// ── Instance undeploy ─────────────────────────────────────────────────────────

#[test]
fn test_two_instances_produce_exactly_two_deletes_each_reported() {
    let gw = ScriptedGateway::new()
        .on_get(DISCOVERY_PATH, 200, r#"[{"instId":"i1"},{"instId":"i2"}]"#)
        .on_delete(&instance_path("i1"), 404)
        .on_delete(&instance_path("i2"), 204);
    let reporter = RecordingReporter::new();

    let report = teardown::undeploy_instances(&gw, &module(), &reporter);

    assert_eq!(gw.deletes(), vec![instance_path("i1"), instance_path("i2")]);
    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("i1") && warnings[0].contains("404"));
    let successes = reporter.successes();
    assert_eq!(successes.len(), 1);
    assert!(successes[0].contains("i2") && successes[0].contains("204"));
    assert_eq!(report.of(Step::DeleteInstance).count(), 2);
}

#[test]
fn test_zero_instances_issue_no_deletes() {
    let gw = ScriptedGateway::new().on_get(DISCOVERY_PATH, 200, "[]");
    let reporter = RecordingReporter::new();

    let report = teardown::undeploy_instances(&gw, &module(), &reporter);

    assert!(gw.deletes().is_empty());
    assert!(report.is_clean());
    assert!(reporter.warnings().is_empty());
}

#[test]
fn test_failed_listing_skips_the_delete_loop() {
    let mut gw = MockGateway::new();
    gw.expect_url()
        .returning(|path| format!("http://gw.test{path}"));
    gw.expect_get()
        .withf(|path| path.to_string() == DISCOVERY_PATH)
        .times(1)
        .returning(|_| Ok(ApiResponse::new(500, "boom")));
    gw.expect_delete().times(0);
    let reporter = RecordingReporter::new();

    let report = teardown::undeploy_instances(&gw, &module(), &reporter);

    let listed = report.of(Step::ListInstances).next().expect("list step");
    assert_eq!(
        listed.outcome,
        Outcome::Failed(CallFailure::UnexpectedStatus { status: 500 })
    );
    assert!(reporter.warnings()[0].contains("500"));
}

#[test]
fn test_listing_transport_failure_skips_the_delete_loop() {
    let mut gw = MockGateway::new();
    gw.expect_url()
        .returning(|path| format!("http://gw.test{path}"));
    gw.expect_get().times(1).returning(|path| {
        Err(GatewayError::Transport {
            url: format!("http://gw.test{path}"),
            message: "timed out".to_string(),
        })
    });
    gw.expect_delete().times(0);
    let reporter = RecordingReporter::new();

    let report = teardown::undeploy_instances(&gw, &module(), &reporter);

    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_undecodable_listing_is_reported_and_treated_as_empty() {
    let gw = ScriptedGateway::new().on_get(DISCOVERY_PATH, 200, "<html>oops</html>");
    let reporter = RecordingReporter::new();

    let report = teardown::undeploy_instances(&gw, &module(), &reporter);

    assert!(gw.deletes().is_empty());
    let listed = report.of(Step::ListInstances).next().expect("list step");
    assert!(matches!(
        listed.outcome,
        Outcome::Failed(CallFailure::MalformedBody { .. })
    ));
}

#[test]
fn test_one_unreachable_instance_does_not_stop_the_others() {
    let gw = ScriptedGateway::new()
        .on_get(
            DISCOVERY_PATH,
            200,
            r#"[{"instId":"i1"},{"instId":"i2"},{"instId":"i3"}]"#,
        )
        .on_delete(&instance_path("i1"), 204)
        .unreachable("DELETE", &instance_path("i2"))
        .on_delete(&instance_path("i3"), 204);
    let reporter = RecordingReporter::new();

    let report = teardown::undeploy_instances(&gw, &module(), &reporter);

    assert_eq!(gw.deletes().len(), 3);
    assert_eq!(report.failures().count(), 1);
    assert_eq!(reporter.successes().len(), 2);
}

#[test]
fn test_every_request_is_emitted_as_a_detail_line() {
    let gw = ScriptedGateway::new().on_get(DISCOVERY_PATH, 200, "[]");
    let reporter = RecordingReporter::new();

    teardown::undeploy_instances(&gw, &module(), &reporter);

    assert_eq!(
        reporter.lines(Line::Detail),
        vec![format!("GET http://gw.test{DISCOVERY_PATH}")]
    );
}
