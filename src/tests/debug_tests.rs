use super::{build_debug_config, DebugHost, JsonDebugHost};
use crate::config::RunnerConfig;
use crate::location::CaseLocation;
use std::path::PathBuf;

fn sample_location() -> CaseLocation {
    CaseLocation {
        absolute_file: PathBuf::from("/proj/pkg/a/file.test.ts"),
        project_root: PathBuf::from("/proj"),
        relative_dir: PathBuf::from("pkg/a"),
        case_name: "adds numbers".to_owned(),
    }
}

#[test]
fn launch_configuration_carries_the_fixed_fields() {
    let launch = build_debug_config(&sample_location(), &RunnerConfig::default());

    assert_eq!(launch.name, "Debug vitest case");
    assert_eq!(launch.request, "launch");
    assert_eq!(launch.cwd, "/proj");
    assert_eq!(launch.runtime_executable, "pnpx");
    assert_eq!(
        launch.runtime_args,
        vec!["vitest", "run", "--dir", "pkg/a", "-t", "file.test.ts", "\"adds numbers\""]
    );
    assert_eq!(launch.skip_files, vec!["<node_internals>/**"]);
    assert_eq!(launch.kind, "pwa-node");
    assert_eq!(launch.console, "integratedTerminal");
    assert_eq!(launch.internal_console_options, "neverOpen");
}

#[test]
fn runtime_args_stay_unescaped() {
    let mut location = sample_location();
    location.relative_dir = PathBuf::from("pkg/a b");
    location.absolute_file = PathBuf::from("/proj/pkg/a b/my file.test.ts");

    let launch = build_debug_config(&location, &RunnerConfig::default());
    assert_eq!(launch.runtime_args[3], "pkg/a b");
    assert_eq!(launch.runtime_args[5], "my file.test.ts");
}

#[test]
fn serializes_with_wire_field_names() {
    let launch = build_debug_config(&sample_location(), &RunnerConfig::default());
    let value = serde_json::to_value(&launch).expect("encode");

    assert_eq!(value["type"], "pwa-node");
    assert_eq!(value["runtimeExecutable"], "pnpx");
    assert_eq!(value["internalConsoleOptions"], "neverOpen");
    assert_eq!(value["skipFiles"][0], "<node_internals>/**");
    assert_eq!(value["console"], "integratedTerminal");
    assert!(value["runtimeArgs"].is_array());
}

#[test]
fn json_host_hands_off_the_configuration() {
    let launch = build_debug_config(&sample_location(), &RunnerConfig::default());

    let mut host = JsonDebugHost::new(Vec::<u8>::new());
    host.start_debugging(&launch).expect("start debugging");

    let rendered = String::from_utf8(host.into_inner()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("json");
    assert_eq!(parsed["request"], "launch");
    assert_eq!(parsed["cwd"], "/proj");
}
