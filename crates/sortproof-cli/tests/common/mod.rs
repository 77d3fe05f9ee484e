//! Shared E2E test helpers for `sortproof` binary tests.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use std::path::Path;
use std::time::Duration;

/// Default timeout for CLI tests.
pub const TIMEOUT_BASIC: Duration = Duration::from_secs(10);

/// Variables that would leak the developer's setup into a test run.
const AMBIENT_VARS: &[&str] = &[
    "RUST_LOG",
    "SORTPROOF_DEBUG",
    "SORTPROOF_VERBOSE",
    "SORTPROOF_COLOR",
    "SORTPROOF_ORDER",
    "SORTPROOF_ALGORITHM",
    "SORTPROOF_FORMAT",
    "SORTPROOF_LOG_FILE",
    "SORTPROOF_LOG_LEVEL",
];

/// Build a Command for the `sortproof` binary in an isolated sandbox.
///
/// `HOME` and the project root (`-C`) both point at a fresh temp directory,
/// so neither the global nor a project config from the host applies.
/// Returns (command, guard); keep the guard alive for the test's duration.
pub fn sortproof_cmd() -> (assert_cmd::Command, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("create temp dir for sandbox");
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("sortproof");
    cmd.timeout(TIMEOUT_BASIC);
    for var in AMBIENT_VARS {
        cmd.env_remove(var);
    }
    cmd.env("HOME", tmp.path());
    cmd.args(["-C", tmp.path().to_str().expect("valid utf8")]);
    (cmd, tmp)
}

/// Write `<root>/.sortproof/config.toml`.
pub fn write_config(root: &Path, content: &str) {
    let dir = root.join(".sortproof");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("config.toml"), content).expect("write config");
}
