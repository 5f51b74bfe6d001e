use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "vcase.toml";
pub const DEFAULT_EXECUTABLE: &str = "pnpx";
pub const DEFAULT_RUNNER: &str = "vitest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub executable: String,
    pub runner: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_owned(),
            runner: DEFAULT_RUNNER.to_owned(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    executable: Option<String>,
    #[serde(default)]
    runner: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        error: std::io::Error,
    },
    Parse {
        path: PathBuf,
        error: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, error } => {
                write!(f, "failed to read {}: {error}", path.display())
            }
            ConfigError::Parse { path, error } => {
                write!(f, "failed to parse {}: {error}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl RunnerConfig {
    // A missing file means defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|error| ConfigError::Read {
            path: path.clone(),
            error,
        })?;
        let parsed: ConfigFile =
            toml::from_str(&raw).map_err(|error| ConfigError::Parse { path, error })?;
        let mut config = Self::default();
        if let Some(executable) = parsed.executable {
            config.executable = executable;
        }
        if let Some(runner) = parsed.runner {
            config.runner = runner;
        }
        Ok(config)
    }
}

pub trait ConfigProvider {
    fn runner_config(&self, root: &Path) -> Result<RunnerConfig, ConfigError>;
}

#[derive(Debug, Default)]
pub struct FileConfigProvider {
    pub executable_override: Option<String>,
}

impl ConfigProvider for FileConfigProvider {
    fn runner_config(&self, root: &Path) -> Result<RunnerConfig, ConfigError> {
        let mut config = RunnerConfig::load(root)?;
        if let Some(executable) = &self.executable_override {
            config.executable = executable.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
