use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_MANIFEST: &str = "package.json";

#[derive(Debug)]
pub enum ResolveError {
    ManifestNotFound { start: PathBuf },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::ManifestNotFound { start } => write!(
                f,
                "no {PROJECT_MANIFEST} found between {} and the filesystem root",
                start.display()
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

// Computed fresh on every call; nothing is cached.
pub fn resolve_project_root(file: &Path) -> Result<PathBuf, ResolveError> {
    let start = case_directory(file);
    let mut current = Some(canonicalize_best_effort(start.clone()));
    while let Some(dir) = current {
        if dir.join(PROJECT_MANIFEST).exists() {
            return Ok(dir);
        }
        current = dir.parent().map(Path::to_path_buf);
    }
    Err(ResolveError::ManifestNotFound { start })
}

pub(crate) fn case_directory(file: &Path) -> PathBuf {
    file.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| file.to_path_buf())
}

pub(crate) fn canonicalize_best_effort(path: PathBuf) -> PathBuf {
    fs::canonicalize(&path).unwrap_or(path)
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
