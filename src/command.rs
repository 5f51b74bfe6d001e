use std::path::Path;

pub fn build_run_args(
    runner: &str,
    relative_dir: &str,
    file_name: Option<&str>,
    case_filter: &str,
) -> Vec<String> {
    let mut args = vec![
        runner.to_owned(),
        "run".to_owned(),
        "--dir".to_owned(),
        relative_dir.to_owned(),
        "-t".to_owned(),
    ];
    if let Some(file_name) = file_name {
        args.push(file_name.to_owned());
    }
    args.push(case_filter.to_owned());
    args
}

pub fn build_debug_args(
    runner: &str,
    relative_dir: &str,
    file_name: Option<&str>,
    case_filter: &str,
) -> Vec<String> {
    build_run_args(runner, relative_dir, file_name, case_filter)
}

pub fn build_cd_args(path: &str) -> Vec<String> {
    vec!["cd".to_owned(), path.to_owned()]
}

// Quoting, not shell escaping: the case name is not a filesystem path.
pub fn quote_case_name(name: &str) -> String {
    serde_json::Value::from(name).to_string()
}

pub fn dir_token(relative_dir: &Path) -> String {
    if relative_dir.as_os_str().is_empty() {
        ".".to_owned()
    } else {
        relative_dir.display().to_string()
    }
}

pub fn file_name_token(file: &Path) -> Option<String> {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
