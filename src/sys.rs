//! Platform and environment helpers.

use std::path::{Path, PathBuf};

/// Check if running in a CI environment.
///
/// Used in `main()` to pick the non-interactive UI, which swaps spinner
/// animations for plain log lines. Checks common CI environment
/// variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Resolve a command name to an executable path by searching PATH.
///
/// A name that already contains a path separator is checked directly
/// instead of being searched, so `--python ./venv/bin/python` works.
/// Returns `None` when no matching executable exists.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let full = dir.join(name);
        if is_executable(&full) {
            return Some(full);
        }
        #[cfg(windows)]
        {
            let with_exe = dir.join(format!("{name}.exe"));
            if is_executable(&with_exe) {
                return Some(with_exe);
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }

    #[test]
    fn find_in_path_locates_sh() {
        #[cfg(unix)]
        assert!(find_in_path("sh").is_some());
    }

    #[test]
    fn find_in_path_misses_nonexistent_command() {
        assert!(find_in_path("turnstile-no-such-binary-x9z").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn find_in_path_checks_explicit_paths_directly() {
        assert_eq!(find_in_path("/bin/sh"), Some(PathBuf::from("/bin/sh")));
        assert!(find_in_path("/bin/turnstile-no-such-binary-x9z").is_none());
    }
}
