use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;

/// Get a Command for pathfind
pub fn pathfind() -> Command {
    let mut cmd = cargo_bin_cmd!("pathfind");
    cmd.env_remove("PATHFIND_CONFIG")
        .env_remove("PATHFIND_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Absolute path to a checked-in fixture file
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
