//! Required file presence checks.

use std::path::Path;

use super::manifest::{RequiredFile, REQUIRED_FILES};

/// Presence result for one required file.
#[derive(Debug)]
pub struct FileCheck {
    /// The manifest entry that was checked.
    pub file: &'static RequiredFile,
    /// Whether the file exists under the project root.
    pub present: bool,
}

/// Check every required file under the project root.
///
/// Absence is recorded, never fatal, so one pass reports the full
/// picture.
pub fn check_files(project_root: &Path) -> Vec<FileCheck> {
    REQUIRED_FILES
        .iter()
        .map(|file| FileCheck {
            file,
            present: project_root.join(file.path).is_file(),
        })
        .collect()
}

/// Paths of the files a check pass found missing.
pub fn missing_paths(checks: &[FileCheck]) -> Vec<String> {
    checks
        .iter()
        .filter(|c| !c.present)
        .map(|c| c.file.path.to_string())
        .collect()
}
