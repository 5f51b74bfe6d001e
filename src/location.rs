use std::path::{Path, PathBuf};

use crate::resolver::{
    canonicalize_best_effort, case_directory, resolve_project_root, ResolveError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseLocation {
    pub absolute_file: PathBuf,
    pub project_root: PathBuf,
    pub relative_dir: PathBuf,
    pub case_name: String,
}

pub fn locate(case_name: &str, file: &Path) -> Result<CaseLocation, ResolveError> {
    let file = canonicalize_best_effort(file.to_path_buf());
    let project_root = resolve_project_root(&file)?;
    let relative_dir = relative_directory(&project_root, &file);
    Ok(CaseLocation {
        absolute_file: file,
        project_root,
        relative_dir,
        case_name: case_name.to_owned(),
    })
}

// An empty root, or a root that is not an ancestor of the file, degrades to
// the file's own directory.
pub fn relative_directory(root: &Path, file: &Path) -> PathBuf {
    let dir = case_directory(file);
    if root.as_os_str().is_empty() {
        return dir;
    }
    dir.strip_prefix(root).map(Path::to_path_buf).unwrap_or(dir)
}

#[cfg(test)]
#[path = "tests/location_tests.rs"]
mod tests;
