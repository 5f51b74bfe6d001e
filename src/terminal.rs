use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Child, ChildStdin, Command as ProcessCommand, Stdio};

#[cfg(unix)]
use nix::unistd::{setpgid, Pid};

// At most one live terminal carries this identity at any time.
pub const TERMINAL_NAME: &str = "vcase";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalId(pub usize);

#[derive(Debug)]
pub enum TerminalError {
    Spawn {
        name: String,
        error: std::io::Error,
    },
    Write {
        name: String,
        error: std::io::Error,
    },
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalError::Spawn { name, error } => {
                write!(f, "failed to spawn terminal `{name}`: {error}")
            }
            TerminalError::Write { name, error } => {
                write!(f, "failed writing to terminal `{name}`: {error}")
            }
        }
    }
}

impl std::error::Error for TerminalError {}

// Searched by name and appended to only; destroying a terminal stays with
// the host. Sent lines execute in queue order.
pub trait TerminalHost {
    fn find_by_identity(&self, name: &str) -> Option<TerminalId>;
    fn create(&mut self, name: &str) -> Result<TerminalId, TerminalError>;
    fn send(&mut self, terminal: TerminalId, text: &str) -> Result<(), TerminalError>;
    fn show(&mut self, terminal: TerminalId) -> Result<(), TerminalError>;
}

pub struct ShellTerminalHost {
    terminals: Vec<ShellTerminal>,
}

struct ShellTerminal {
    name: String,
    child: Child,
    stdin: Option<ChildStdin>,
}

impl ShellTerminalHost {
    pub fn new() -> Self {
        Self {
            terminals: Vec::new(),
        }
    }

    // Closes each shell's stdin and waits for it to drain its queued lines.
    pub fn shutdown(mut self) -> Vec<(String, Option<i32>)> {
        let mut statuses = Vec::with_capacity(self.terminals.len());
        for shell in &mut self.terminals {
            drop(shell.stdin.take());
            let code = shell.child.wait().ok().and_then(|status| status.code());
            statuses.push((shell.name.clone(), code));
        }
        statuses
    }
}

impl Default for ShellTerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalHost for ShellTerminalHost {
    fn find_by_identity(&self, name: &str) -> Option<TerminalId> {
        self.terminals
            .iter()
            .position(|shell| shell.name == name)
            .map(TerminalId)
    }

    fn create(&mut self, name: &str) -> Result<TerminalId, TerminalError> {
        let cwd = std::env::current_dir().map_err(|error| TerminalError::Spawn {
            name: name.to_owned(),
            error,
        })?;
        let mut process = ProcessCommand::new("sh");
        process
            .arg("-l")
            .current_dir(&cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        #[cfg(unix)]
        unsafe {
            process.pre_exec(|| {
                setpgid(Pid::from_raw(0), Pid::from_raw(0))
                    .map_err(|error| std::io::Error::new(ErrorKind::Other, error.to_string()))
            });
        }
        with_local_node_bin_path(&mut process, &cwd);
        let mut child = process.spawn().map_err(|error| TerminalError::Spawn {
            name: name.to_owned(),
            error,
        })?;
        let stdin = child.stdin.take();
        self.terminals.push(ShellTerminal {
            name: name.to_owned(),
            child,
            stdin,
        });
        Ok(TerminalId(self.terminals.len() - 1))
    }

    fn send(&mut self, terminal: TerminalId, text: &str) -> Result<(), TerminalError> {
        let Some(shell) = self.terminals.get_mut(terminal.0) else {
            return Ok(());
        };
        let Some(stdin) = shell.stdin.as_mut() else {
            return Err(TerminalError::Write {
                name: shell.name.clone(),
                error: std::io::Error::new(ErrorKind::BrokenPipe, "terminal stdin closed"),
            });
        };
        stdin
            .write_all(text.as_bytes())
            .and_then(|_| stdin.write_all(b"\n"))
            .and_then(|_| stdin.flush())
            .map_err(|error| TerminalError::Write {
                name: shell.name.clone(),
                error,
            })
    }

    fn show(&mut self, _terminal: TerminalId) -> Result<(), TerminalError> {
        // Inherited stdio is already in view.
        Ok(())
    }
}

fn with_local_node_bin_path(process: &mut ProcessCommand, cwd: &Path) {
    let local_bin = cwd.join("node_modules/.bin");
    if !local_bin.is_dir() {
        return;
    }
    let local_rendered = local_bin.display().to_string();
    let merged = match std::env::var("PATH") {
        Ok(path) if !path.is_empty() => format!("{local_rendered}:{path}"),
        _ => local_rendered,
    };
    process.env("PATH", merged);
}
