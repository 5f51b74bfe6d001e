use std::io::Write;

use serde::Serialize;

use crate::command::{build_debug_args, dir_token, file_name_token, quote_case_name};
use crate::config::RunnerConfig;
use crate::location::CaseLocation;

pub const DEBUG_CONFIG_NAME: &str = "Debug vitest case";
pub const DEBUG_TYPE: &str = "pwa-node";
pub const SKIP_NODE_INTERNALS: &str = "<node_internals>/**";

// Field names follow the debug-adapter wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugConfiguration {
    pub name: String,
    pub request: String,
    pub runtime_args: Vec<String>,
    pub cwd: String,
    pub runtime_executable: String,
    pub skip_files: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub console: String,
    pub internal_console_options: String,
}

// Runtime arguments are a structured array, so path tokens stay unescaped.
pub fn build_debug_config(location: &CaseLocation, config: &RunnerConfig) -> DebugConfiguration {
    DebugConfiguration {
        name: DEBUG_CONFIG_NAME.to_owned(),
        request: "launch".to_owned(),
        runtime_args: build_debug_args(
            &config.runner,
            &dir_token(&location.relative_dir),
            file_name_token(&location.absolute_file).as_deref(),
            &quote_case_name(&location.case_name),
        ),
        cwd: location.project_root.display().to_string(),
        runtime_executable: config.executable.clone(),
        skip_files: vec![SKIP_NODE_INTERNALS.to_owned()],
        kind: DEBUG_TYPE.to_owned(),
        console: "integratedTerminal".to_owned(),
        internal_console_options: "neverOpen".to_owned(),
    }
}

#[derive(Debug)]
pub enum DebugHostError {
    Encode(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for DebugHostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebugHostError::Encode(error) => {
                write!(f, "failed to encode launch configuration: {error}")
            }
            DebugHostError::Io(error) => {
                write!(f, "failed to hand off launch configuration: {error}")
            }
        }
    }
}

impl std::error::Error for DebugHostError {}

// Success or failure of the actual debug session stays with the host.
pub trait DebugHost {
    fn start_debugging(&mut self, config: &DebugConfiguration) -> Result<(), DebugHostError>;
}

pub struct JsonDebugHost<W: Write> {
    writer: W,
}

impl<W: Write> JsonDebugHost<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DebugHost for JsonDebugHost<W> {
    fn start_debugging(&mut self, config: &DebugConfiguration) -> Result<(), DebugHostError> {
        let rendered = serde_json::to_string_pretty(config).map_err(DebugHostError::Encode)?;
        writeln!(self.writer, "{rendered}").map_err(DebugHostError::Io)
    }
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
