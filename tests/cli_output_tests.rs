use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn run_sends_cd_then_runner_line_through_the_shell() {
    let root = temp_workspace("run-echo");
    fs::write(root.join("package.json"), "{ \"name\": \"proj\" }\n").expect("write manifest");
    fs::write(root.join("vcase.toml"), "executable = \"echo\"\n").expect("write config");
    let nested = root.join("pkg/a");
    fs::create_dir_all(&nested).expect("create nested");
    let file = nested.join("file.test.ts");
    fs::write(&file, "").expect("write file");

    let output = Command::new(env!("CARGO_BIN_EXE_vcase"))
        .arg("run")
        .arg("--file")
        .arg(&file)
        .arg("--case")
        .arg("adds numbers")
        .env("NO_COLOR", "1")
        .output()
        .expect("run vcase");

    assert!(
        output.status.success(),
        "stdout={}\nstderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("vitest run --dir pkg/a -t file.test.ts adds numbers"),
        "stdout={stdout}"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("case command completed"));
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn run_verbose_prints_the_resolution_trace() {
    let root = temp_workspace("run-verbose");
    fs::write(root.join("package.json"), "{ \"name\": \"proj\" }\n").expect("write manifest");
    fs::write(root.join("vcase.toml"), "executable = \"echo\"\n").expect("write config");
    let file = root.join("file.test.ts");
    fs::write(&file, "").expect("write file");

    let output = Command::new(env!("CARGO_BIN_EXE_vcase"))
        .arg("run")
        .arg("--file")
        .arg(&file)
        .arg("--case")
        .arg("adds numbers")
        .arg("--verbose")
        .env("NO_COLOR", "1")
        .output()
        .expect("run vcase");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Case run"));
    assert!(stdout.contains("  dir: ."));
    assert!(stdout.contains("  sent: cd "));
}

#[test]
fn debug_emits_a_launch_configuration_as_json() {
    let root = temp_workspace("debug-json").join("proj");
    fs::create_dir_all(&root).expect("create project root");
    fs::write(root.join("package.json"), "{ \"name\": \"proj\" }\n").expect("write manifest");
    let nested = root.join("pkg/a");
    fs::create_dir_all(&nested).expect("create nested");
    let file = nested.join("file.test.ts");
    fs::write(&file, "").expect("write file");

    let output = Command::new(env!("CARGO_BIN_EXE_vcase"))
        .arg("debug")
        .arg("--file")
        .arg(&file)
        .arg("--case")
        .arg("adds numbers")
        .env("NO_COLOR", "1")
        .output()
        .expect("run vcase");

    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("launch json");
    assert_eq!(parsed["type"], "pwa-node");
    assert_eq!(parsed["request"], "launch");
    assert_eq!(parsed["runtimeExecutable"], "pnpx");
    assert_eq!(parsed["runtimeArgs"][2], "--dir");
    assert_eq!(parsed["runtimeArgs"][3], "pkg/a");
    assert_eq!(parsed["console"], "integratedTerminal");
    assert!(parsed["cwd"].as_str().expect("cwd").ends_with("proj"));
}

#[test]
fn missing_manifest_fails_without_terminal_output() {
    let root = temp_workspace("no-manifest");
    let nested = root.join("pkg/a");
    fs::create_dir_all(&nested).expect("create nested");
    let file = nested.join("file.test.ts");
    fs::write(&file, "").expect("write file");

    let output = Command::new(env!("CARGO_BIN_EXE_vcase"))
        .arg("run")
        .arg("--file")
        .arg(&file)
        .arg("--case")
        .arg("adds numbers")
        .env("NO_COLOR", "1")
        .output()
        .expect("run vcase");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().is_empty(), "stdout={stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Case action failed"));
    assert!(stderr.contains("package.json"));
}

#[test]
fn cli_parse_error_includes_usage_in_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_vcase"))
        .arg("run")
        .arg("--file")
        .env("NO_COLOR", "1")
        .output()
        .expect("run vcase");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Invalid command arguments"));
    assert!(stderr.contains("USAGE"));
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn cli_help_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_vcase"))
        .arg("--help")
        .env("NO_COLOR", "1")
        .output()
        .expect("run vcase");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("USAGE"));
    assert!(stderr.contains("vcase run --file <PATH> --case <NAME>"));
}

fn temp_workspace(name: &str) -> PathBuf {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let root = std::env::temp_dir().join(format!("vcase-it-{name}-{ts}"));
    fs::create_dir_all(&root).expect("create workspace");
    root
}
