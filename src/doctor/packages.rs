//! Dependency import probes.
//!
//! Installation state is judged the same way the service will experience
//! it: by importing each required module through the project's
//! interpreter. Anything else (pip metadata, site-packages scans) can
//! disagree with what `import` actually does under the active
//! environment.

use std::path::Path;

use crate::python::PythonInterpreter;

use super::manifest::{RequiredPackage, REQUIRED_PACKAGES};

/// Import outcome for one required package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    /// The module imported cleanly.
    Importable,
    /// The import failed.
    Missing,
    /// The probe never ran (no usable interpreter).
    Skipped,
}

/// Result of probing one required package.
#[derive(Debug)]
pub struct PackageCheck {
    /// The manifest entry that was probed.
    pub package: &'static RequiredPackage,
    /// Import outcome.
    pub status: PackageStatus,
    /// Diagnostic for failed probes.
    pub detail: Option<String>,
}

/// Probes required packages through an interpreter.
pub struct PackageChecker<'a> {
    interpreter: Option<&'a PythonInterpreter>,
    project_root: &'a Path,
}

impl<'a> PackageChecker<'a> {
    /// Create a checker. Passing `None` for the interpreter marks every
    /// probe as skipped instead of spawning doomed subprocesses.
    pub fn new(interpreter: Option<&'a PythonInterpreter>, project_root: &'a Path) -> Self {
        Self {
            interpreter,
            project_root,
        }
    }

    /// Probe every required package, in manifest order.
    ///
    /// A failed probe is recorded and the remaining probes still run;
    /// one broken package must not hide the state of the others.
    pub fn check_all(&self) -> Vec<PackageCheck> {
        REQUIRED_PACKAGES
            .iter()
            .map(|package| self.check_one(package))
            .collect()
    }

    fn check_one(&self, package: &'static RequiredPackage) -> PackageCheck {
        let Some(interpreter) = self.interpreter else {
            return PackageCheck {
                package,
                status: PackageStatus::Skipped,
                detail: Some("interpreter unavailable".to_string()),
            };
        };

        match interpreter.check_import(package.import_name, Some(self.project_root)) {
            Ok(probe) if probe.success => PackageCheck {
                package,
                status: PackageStatus::Importable,
                detail: None,
            },
            Ok(probe) => {
                // Strip the exception class when the failure is the
                // common one; anything else keeps the full diagnostic.
                let detail = match probe.missing_module() {
                    Some(module) => format!("No module named '{}'", module),
                    None => probe.diagnostic(),
                };
                PackageCheck {
                    package,
                    status: PackageStatus::Missing,
                    detail: Some(detail),
                }
            }
            Err(e) => PackageCheck {
                package,
                status: PackageStatus::Missing,
                detail: Some(e.to_string()),
            },
        }
    }
}

/// Distribution names of packages a check pass found missing.
pub fn missing_dists(checks: &[PackageCheck]) -> Vec<String> {
    checks
        .iter()
        .filter(|c| c.status == PackageStatus::Missing)
        .map(|c| c.package.dist_name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_interpreter_skips_every_probe() {
        let dir = TempDir::new().unwrap();
        let checker = PackageChecker::new(None, dir.path());

        let checks = checker.check_all();

        assert_eq!(checks.len(), REQUIRED_PACKAGES.len());
        assert!(checks.iter().all(|c| c.status == PackageStatus::Skipped));
        assert!(missing_dists(&checks).is_empty());
    }

    #[cfg(unix)]
    mod with_stub_interpreter {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        /// Stub interpreter that accepts imports for the given modules
        /// and raises ModuleNotFoundError for everything else.
        fn stub(dir: &std::path::Path, importable: &[&str]) -> PathBuf {
            let path = dir.join("python3");
            let script = format!(
                r#"#!/bin/sh
# args: -c "import <module>"
module=$(printf '%s' "$2" | sed "s/^import //")
for ok in {} ; do
    if [ "$module" = "$ok" ]; then
        exit 0
    fi
done
printf "ModuleNotFoundError: No module named '%s'\n" "$module" >&2
exit 1
"#,
                importable.join(" ")
            );
            std::fs::write(&path, script).unwrap();
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            path
        }

        #[test]
        fn all_importable_packages_pass() {
            let dir = TempDir::new().unwrap();
            let imports: Vec<&str> = REQUIRED_PACKAGES.iter().map(|p| p.import_name).collect();
            let py_path = stub(dir.path(), &imports);
            let py = PythonInterpreter::locate(py_path.to_str().unwrap()).unwrap();

            let checker = PackageChecker::new(Some(&py), dir.path());
            let checks = checker.check_all();

            assert!(checks
                .iter()
                .all(|c| c.status == PackageStatus::Importable));
        }

        #[test]
        fn missing_package_is_reported_by_dist_name() {
            let dir = TempDir::new().unwrap();
            // Everything importable except exa (the exa_py distribution).
            let imports: Vec<&str> = REQUIRED_PACKAGES
                .iter()
                .map(|p| p.import_name)
                .filter(|m| *m != "exa")
                .collect();
            let py_path = stub(dir.path(), &imports);
            let py = PythonInterpreter::locate(py_path.to_str().unwrap()).unwrap();

            let checker = PackageChecker::new(Some(&py), dir.path());
            let checks = checker.check_all();
            let missing = missing_dists(&checks);

            assert_eq!(missing, ["exa_py"]);
            let failed = checks
                .iter()
                .find(|c| c.package.dist_name == "exa_py")
                .unwrap();
            assert!(failed
                .detail
                .as_deref()
                .unwrap()
                .contains("No module named 'exa'"));
        }

        #[test]
        fn one_failure_does_not_stop_later_probes() {
            let dir = TempDir::new().unwrap();
            // Only the last manifest entry imports.
            let py_path = stub(dir.path(), &["sqlalchemy"]);
            let py = PythonInterpreter::locate(py_path.to_str().unwrap()).unwrap();

            let checker = PackageChecker::new(Some(&py), dir.path());
            let checks = checker.check_all();

            assert_eq!(checks.len(), REQUIRED_PACKAGES.len());
            let last = checks.last().unwrap();
            assert_eq!(last.package.dist_name, "sqlalchemy");
            assert_eq!(last.status, PackageStatus::Importable);
        }
    }
}
