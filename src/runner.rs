use std::path::Path;

use crate::command::{build_cd_args, build_run_args, dir_token, file_name_token, quote_case_name};
use crate::config::{ConfigError, ConfigProvider, FileConfigProvider, RunnerConfig};
use crate::debug::{build_debug_config, DebugConfiguration, DebugHost, DebugHostError, JsonDebugHost};
use crate::escape;
use crate::location::{locate, CaseLocation};
use crate::resolver::ResolveError;
use crate::terminal::{ShellTerminalHost, TerminalError, TerminalHost, TERMINAL_NAME};
use crate::{CaseArgs, Command};

#[derive(Debug)]
pub enum RunnerError {
    Resolve(ResolveError),
    Config(ConfigError),
    Terminal(TerminalError),
    DebugHost(DebugHostError),
    TerminalCommandStatus {
        terminal: String,
        code: Option<i32>,
    },
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerError::Resolve(error) => write!(f, "{error}"),
            RunnerError::Config(error) => write!(f, "{error}"),
            RunnerError::Terminal(error) => write!(f, "{error}"),
            RunnerError::DebugHost(error) => write!(f, "{error}"),
            RunnerError::TerminalCommandStatus { terminal, code } => match code {
                Some(code) => {
                    write!(f, "terminal `{terminal}` command exited with status {code}")
                }
                None => write!(f, "terminal `{terminal}` command was interrupted"),
            },
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<ResolveError> for RunnerError {
    fn from(value: ResolveError) -> Self {
        Self::Resolve(value)
    }
}

impl From<ConfigError> for RunnerError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TerminalError> for RunnerError {
    fn from(value: TerminalError) -> Self {
        Self::Terminal(value)
    }
}

impl From<DebugHostError> for RunnerError {
    fn from(value: DebugHostError) -> Self {
        Self::DebugHost(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTranscript {
    pub location: CaseLocation,
    pub lines: Vec<String>,
}

// Root resolution happens before any terminal interaction: a failed resolve
// leaves the host untouched.
pub fn run_in_terminal(
    host: &mut dyn TerminalHost,
    config: &dyn ConfigProvider,
    case_name: &str,
    file: &Path,
) -> Result<SessionTranscript, RunnerError> {
    let location = locate(case_name, file)?;
    let config = config.runner_config(&location.project_root)?;
    let terminal = match host.find_by_identity(TERMINAL_NAME) {
        Some(terminal) => terminal,
        None => host.create(TERMINAL_NAME)?,
    };
    let cd_line =
        build_cd_args(&escape::shell_path(&location.project_root.display().to_string())).join(" ");
    host.send(terminal, &cd_line)?;
    let run_line = render_run_line(&location, &config);
    host.send(terminal, &run_line)?;
    host.show(terminal)?;
    Ok(SessionTranscript {
        location,
        lines: vec![cd_line, run_line],
    })
}

// Path-derived tokens are escaped here, exactly once: this string gets
// re-parsed by the shell.
fn render_run_line(location: &CaseLocation, config: &RunnerConfig) -> String {
    let file_name =
        file_name_token(&location.absolute_file).map(|name| escape::shell_path(&name));
    let args = build_run_args(
        &config.runner,
        &escape::shell_path(&dir_token(&location.relative_dir)),
        file_name.as_deref(),
        &quote_case_name(&location.case_name),
    );
    let mut tokens = vec![config.executable.clone()];
    tokens.extend(args);
    tokens.join(" ")
}

pub fn debug_in_terminal(
    host: &mut dyn DebugHost,
    config: &dyn ConfigProvider,
    case_name: &str,
    file: &Path,
) -> Result<DebugConfiguration, RunnerError> {
    let location = locate(case_name, file)?;
    let config = config.runner_config(&location.project_root)?;
    let launch = build_debug_config(&location, &config);
    host.start_debugging(&launch)?;
    Ok(launch)
}

pub fn run_command(command: Command) -> Result<String, RunnerError> {
    match command {
        Command::Run(args) => run_case(args),
        Command::Debug(args) => debug_case(args),
        Command::Help => Ok(String::new()),
    }
}

fn run_case(args: CaseArgs) -> Result<String, RunnerError> {
    let provider = FileConfigProvider {
        executable_override: args.executable,
    };
    let mut host = ShellTerminalHost::new();
    let transcript = run_in_terminal(&mut host, &provider, &args.case_name, &args.file)?;
    for (terminal, code) in host.shutdown() {
        if code != Some(0) {
            return Err(RunnerError::TerminalCommandStatus { terminal, code });
        }
    }
    if args.verbose {
        return Ok(render_case_trace(&transcript));
    }
    Ok(String::new())
}

fn debug_case(args: CaseArgs) -> Result<String, RunnerError> {
    let provider = FileConfigProvider {
        executable_override: args.executable,
    };
    let mut host = JsonDebugHost::new(std::io::stdout());
    let launch = debug_in_terminal(&mut host, &provider, &args.case_name, &args.file)?;
    if args.verbose {
        return Ok(render_launch_trace(&launch));
    }
    Ok(String::new())
}

fn render_case_trace(transcript: &SessionTranscript) -> String {
    let location = &transcript.location;
    let mut lines = vec![
        "Case run".to_owned(),
        format!("  root: {}", location.project_root.display()),
        format!("  dir: {}", dir_token(&location.relative_dir)),
        format!("  case: {}", location.case_name),
    ];
    for line in &transcript.lines {
        lines.push(format!("  sent: {line}"));
    }
    lines.join("\n")
}

fn render_launch_trace(launch: &DebugConfiguration) -> String {
    [
        "Debug launch".to_owned(),
        format!("  cwd: {}", launch.cwd),
        format!("  runtimeExecutable: {}", launch.runtime_executable),
        format!("  runtimeArgs: {}", launch.runtime_args.join(" ")),
    ]
    .join("\n")
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod tests;
