//! Shared helpers: a sandboxed binary invocation.

#![allow(clippy::expect_used, deprecated, dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// A `gateway-teardown` command that ignores the caller's environment and
/// configuration. Keep the returned `TempDir` alive for the command's lifetime.
pub fn teardown_cmd() -> (Command, TempDir) {
    let sandbox = tempfile::tempdir().expect("tempdir");
    let mut cmd = Command::cargo_bin("gateway-teardown").expect("binary should exist");
    cmd.current_dir(sandbox.path())
        .env("GATEWAY_TEARDOWN_CONFIG", sandbox.path().join("config.yaml"))
        .env_remove("GATEWAY_URL")
        .env_remove("GATEWAY_TOKEN")
        .env_remove("NO_COLOR");
    (cmd, sandbox)
}

/// Write `target/ModuleDescriptor.json` inside the sandbox.
pub fn write_descriptor(sandbox: &TempDir, json: &str) {
    let target = sandbox.path().join("target");
    std::fs::create_dir_all(&target).expect("mkdir target");
    std::fs::write(target.join("ModuleDescriptor.json"), json).expect("write descriptor");
}
