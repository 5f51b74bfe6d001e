use super::{ConfigError, ConfigProvider, FileConfigProvider, RunnerConfig};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn missing_file_yields_defaults() {
    let root = temp_dir("defaults");
    fs::create_dir_all(&root).expect("create root");

    let config = RunnerConfig::load(&root).expect("load");
    assert_eq!(config.executable, "pnpx");
    assert_eq!(config.runner, "vitest");
}

#[test]
fn reads_overrides_from_the_project_file() {
    let root = temp_dir("file");
    fs::create_dir_all(&root).expect("create root");
    fs::write(root.join("vcase.toml"), "executable = \"npx\"\n").expect("write config");

    let config = RunnerConfig::load(&root).expect("load");
    assert_eq!(config.executable, "npx");
    assert_eq!(config.runner, "vitest");
}

#[test]
fn rejects_unknown_keys() {
    let root = temp_dir("unknown");
    fs::create_dir_all(&root).expect("create root");
    fs::write(root.join("vcase.toml"), "exec = \"npx\"\n").expect("write config");

    let error = RunnerConfig::load(&root).expect_err("must fail");
    assert!(matches!(error, ConfigError::Parse { .. }));
}

#[test]
fn cli_override_wins_over_the_file() {
    let root = temp_dir("override");
    fs::create_dir_all(&root).expect("create root");
    fs::write(root.join("vcase.toml"), "executable = \"npx\"\n").expect("write config");

    let provider = FileConfigProvider {
        executable_override: Some("bunx".to_owned()),
    };
    let config = provider.runner_config(&root).expect("resolve config");
    assert_eq!(config.executable, "bunx");
}

fn temp_dir(name: &str) -> PathBuf {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    std::env::temp_dir().join(format!("vcase-config-{name}-{ts}"))
}
