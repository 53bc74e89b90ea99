//! CLI tests for `surfenv`.
//!
//! Spawns the binary with a scrubbed environment and checks its output and exit codes.

use std::process::{Command, Output};

const TOOL_VARS: [&str; 4] = ["MSMS_BIN", "PDB2PQR_BIN", "APBS_BIN", "MULTIVALUE_BIN"];

fn surfenv() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_surfenv"));
    cmd.env_remove("RUST_LOG")
        .env_remove("SURFENV_SURFACE_ROOT")
        .env_remove("SURFENV_COMPANION_REPO");
    for var in TOOL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("run surfenv")
}

#[test]
fn prints_variables_in_resolution_order() {
    let out = run(surfenv().args(["--surface-root", "/repoB"]));
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "MSMS_BIN=/repoB/comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/msms",
            "PDB2PQR_BIN=/repoB/comp_surface/tools/transfer/pdb2pqr-linux-bin64-2.1.1/pdb2pqr",
            "APBS_BIN=/repoB/comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/apbs",
            "MULTIVALUE_BIN=/repoB/comp_surface/tools/transfer/APBS-3.4.1.Linux/share/apbs/tools/bin/multivalue",
        ]
    );
}

#[test]
fn json_output_carries_epsilon_and_paths() {
    let out = run(surfenv().args(["--surface-root", "/repoB", "--companion-repo", "/repoA", "--json"]));
    assert_eq!(out.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["epsilon"].as_f64(), Some(1.0e-6));
    assert_eq!(v["version"].as_str(), Some(env!("CARGO_PKG_VERSION")));
    assert_eq!(v["companion_repo"].as_str(), Some("/repoA"));
    assert_eq!(v["tools"]["apbs"].as_str(), Some("/repoB/comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/apbs"));
}

#[test]
fn surface_root_from_environment_input() {
    let out = run(surfenv().env("SURFENV_SURFACE_ROOT", "/env/root"));
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    assert!(stdout.starts_with("MSMS_BIN=/env/root/comp_surface/"), "{stdout}");
}

#[test]
fn missing_root_exits_with_error() {
    let out = run(&mut surfenv());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("ERROR: surface root is not configured"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn relative_root_exits_with_error() {
    let out = run(surfenv().args(["--surface-root", "repoB"]));
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("ERROR: surface_root must be an absolute path"), "{stderr}");
}

#[test]
fn unreadable_config_uses_same_diagnostic() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("missing.json");
    let out = run(surfenv().arg("--config").arg(&missing));
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("ERROR: read config"), "{stderr}");
}

#[test]
fn config_file_supplies_root_and_policy() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("surfenv.json");
    std::fs::write(&path, r#"{"surface_root": "/file/root", "policy": "preserve"}"#).expect("write");
    let out = run(surfenv().arg("--config").arg(&path).env("MSMS_BIN", "/custom/msms"));
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    assert!(stdout.contains("MSMS_BIN=/custom/msms\n"), "{stdout}");
    assert!(stdout.contains("APBS_BIN=/file/root/comp_surface/"), "{stdout}");
}

#[test]
fn preserve_env_keeps_operator_value() {
    let out = run(surfenv().args(["--surface-root", "/repoB", "--preserve-env"]).env("APBS_BIN", "/custom/apbs"));
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    assert!(stdout.contains("APBS_BIN=/custom/apbs\n"), "{stdout}");
    assert!(stdout.contains("MSMS_BIN=/repoB/comp_surface/"), "{stdout}");
}

#[test]
fn overwrite_is_the_default() {
    let out = run(surfenv().args(["--surface-root", "/repoB"]).env("APBS_BIN", "/custom/apbs"));
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    assert!(stdout.contains("APBS_BIN=/repoB/comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/apbs\n"), "{stdout}");
}

#[test]
fn check_fails_when_binaries_are_missing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = run(surfenv().arg("--surface-root").arg(temp.path()).arg("--check"));
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("WARNING: MSMS_BIN points to a missing file"), "{stderr}");
}

#[test]
fn check_passes_when_binaries_exist() {
    let temp = tempfile::tempdir().expect("tempdir");
    for sub in [
        "comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/msms",
        "comp_surface/tools/transfer/pdb2pqr-linux-bin64-2.1.1/pdb2pqr",
        "comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/apbs",
        "comp_surface/tools/transfer/APBS-3.4.1.Linux/share/apbs/tools/bin/multivalue",
    ] {
        let path = temp.path().join(sub);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(&path, b"").expect("write");
    }
    let out = run(surfenv().arg("--surface-root").arg(temp.path()).arg("--check"));
    assert_eq!(out.status.code(), Some(0));
}
