pub mod command;
pub mod config;
pub mod debug;
pub mod escape;
pub mod location;
pub mod resolver;
pub mod runner;
pub mod terminal;
pub mod ui;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CaseArgs),
    Debug(CaseArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseArgs {
    pub case_name: String,
    pub file: PathBuf,
    pub executable: Option<String>,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliParseError {
    UnknownCommand(String),
    UnknownArgument(String),
    MissingFileValue,
    MissingCaseValue,
    MissingExecutableValue,
    MissingFile,
    MissingCase,
}

impl std::fmt::Display for CliParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliParseError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            CliParseError::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            CliParseError::MissingFileValue => write!(f, "--file requires a value"),
            CliParseError::MissingCaseValue => write!(f, "--case requires a value"),
            CliParseError::MissingExecutableValue => write!(f, "--executable requires a value"),
            CliParseError::MissingFile => write!(f, "--file <PATH> is required"),
            CliParseError::MissingCase => write!(f, "--case <NAME> is required"),
        }
    }
}

impl std::error::Error for CliParseError {}

pub fn parse_command<I>(args: I) -> Result<Command, CliParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(cmd) = args.next() else {
        return Ok(Command::Help);
    };

    if cmd == "--help" || cmd == "-h" {
        return Ok(Command::Help);
    }

    if cmd == "run" {
        return Ok(match parse_case_args(args)? {
            Some(case) => Command::Run(case),
            None => Command::Help,
        });
    }
    if cmd == "debug" {
        return Ok(match parse_case_args(args)? {
            Some(case) => Command::Debug(case),
            None => Command::Help,
        });
    }

    Err(CliParseError::UnknownCommand(cmd))
}

fn parse_case_args<I>(args: I) -> Result<Option<CaseArgs>, CliParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut file: Option<PathBuf> = None;
    let mut case_name: Option<String> = None;
    let mut executable: Option<String> = None;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => {
                let Some(path) = args.next() else {
                    return Err(CliParseError::MissingFileValue);
                };
                file = Some(PathBuf::from(path));
            }
            "--case" => {
                let Some(name) = args.next() else {
                    return Err(CliParseError::MissingCaseValue);
                };
                case_name = Some(name);
            }
            "--executable" => {
                let Some(cmd) = args.next() else {
                    return Err(CliParseError::MissingExecutableValue);
                };
                executable = Some(cmd);
            }
            "--verbose" => {
                verbose = true;
            }
            "--help" | "-h" => return Ok(None),
            other => return Err(CliParseError::UnknownArgument(other.to_owned())),
        }
    }

    let Some(file) = file else {
        return Err(CliParseError::MissingFile);
    };
    let Some(case_name) = case_name else {
        return Err(CliParseError::MissingCase);
    };

    Ok(Some(CaseArgs {
        case_name,
        file,
        executable,
        verbose,
    }))
}

pub fn print_usage() {
    eprintln!(
        "vcase\n\nUSAGE:\n  vcase run --file <PATH> --case <NAME> [--executable <CMD>] [--verbose]\n  vcase debug --file <PATH> --case <NAME> [--executable <CMD>] [--verbose]\n\nCOMMANDS:\n  run               Send the vitest invocation for one case to the reusable terminal\n  debug             Emit a debug-adapter launch configuration for one case\n\nOPTIONS:\n  --file <PATH>     Source file containing the case\n  --case <NAME>     Name of the case to run\n  --executable <CMD> Override the runner executable (default: pnpx)\n  --verbose         Print the root and command resolution trace\n\nGENERAL:\n  -h, --help        Print help\n"
    );
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
