//! Python interpreter probing.
//!
//! The audited service is a Python application, so file checks aside,
//! every question the auditor asks ("is fastapi installed?", "does the
//! app module import?") is answered by running short snippets through
//! the project's interpreter and inspecting the outcome.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use crate::error::{Result, TurnstileError};
use crate::sys;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_PYTHON_VERSION, r"Python (\d+(?:\.\d+)*\S*)");
lazy_regex!(
    RE_MODULE_NOT_FOUND,
    r"ModuleNotFoundError: No module named '([^']+)'"
);

/// Outcome of running a snippet through the interpreter.
///
/// A non-zero exit is a normal outcome here, not an error: probes exist
/// to observe failures. `Err` is reserved for the interpreter itself
/// being unrunnable.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the snippet exited 0.
    pub success: bool,
}

impl ProbeResult {
    /// The most useful single diagnostic line from a failed probe.
    ///
    /// Python tracebacks put the exception on the last line of stderr,
    /// so prefer that, then fall back to stdout, then the exit code.
    pub fn diagnostic(&self) -> String {
        if let Some(line) = last_nonempty_line(&self.stderr) {
            return line.to_string();
        }
        if let Some(line) = last_nonempty_line(&self.stdout) {
            return line.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by signal".to_string(),
        }
    }

    /// The module name from a `ModuleNotFoundError`, if the probe raised one.
    pub fn missing_module(&self) -> Option<String> {
        RE_MODULE_NOT_FOUND
            .captures(&self.stderr)
            .map(|caps| caps[1].to_string())
    }
}

fn last_nonempty_line(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

/// A located Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    path: PathBuf,
}

impl PythonInterpreter {
    /// Locate an interpreter by name or explicit path.
    pub fn locate(name: &str) -> Result<Self> {
        sys::find_in_path(name)
            .map(|path| Self { path })
            .ok_or_else(|| TurnstileError::InterpreterNotFound {
                name: name.to_string(),
            })
    }

    /// Path to the interpreter executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report the interpreter's version string (e.g. "3.12.1").
    ///
    /// Older interpreters print the version banner to stderr, so both
    /// streams are searched.
    pub fn version(&self) -> Result<String> {
        let probe = self.run(&["--version"], None)?;
        let combined = format!("{}\n{}", probe.stdout, probe.stderr);
        RE_PYTHON_VERSION
            .captures(&combined)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "could not parse version from '{}'",
                    combined.trim()
                )
                .into()
            })
    }

    /// Run `python -c <code>`, optionally inside a working directory.
    pub fn run_code(&self, code: &str, cwd: Option<&Path>) -> Result<ProbeResult> {
        self.run(&["-c", code], cwd)
    }

    /// Attempt `import <module>` from the given working directory.
    pub fn check_import(&self, module: &str, cwd: Option<&Path>) -> Result<ProbeResult> {
        self.run_code(&format!("import {}", module), cwd)
    }

    /// Run `python -m <module> <args...>` in the foreground.
    ///
    /// Stdio is inherited: this hands the terminal to a long-running
    /// child (the development server) until it exits.
    pub fn run_module(
        &self,
        module: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<std::process::ExitStatus> {
        let mut cmd = Command::new(&self.path);
        cmd.arg("-m").arg(module).args(args).current_dir(cwd);

        tracing::debug!(
            "launching {} -m {} {}",
            self.path.display(),
            module,
            args.join(" ")
        );

        cmd.status().map_err(|_| TurnstileError::CommandFailed {
            command: format!("{} -m {} {}", self.path.display(), module, args.join(" ")),
            code: None,
        })
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<ProbeResult> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.path);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|_| TurnstileError::CommandFailed {
            command: format!("{} {}", self.path.display(), args.join(" ")),
            code: None,
        })?;

        let duration = start.elapsed();
        let result = ProbeResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration,
            success: output.status.success(),
        };

        tracing::debug!(
            "probe {} {:?} -> {:?} in {:?}",
            self.path.display(),
            args,
            result.exit_code,
            duration
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(stdout: &str, stderr: &str, exit_code: i32) -> ProbeResult {
        ProbeResult {
            exit_code: Some(exit_code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration: Duration::from_millis(5),
            success: exit_code == 0,
        }
    }

    #[test]
    fn diagnostic_prefers_last_stderr_line() {
        let p = probe(
            "ignored",
            "Traceback (most recent call last):\n  File \"<string>\", line 1\nModuleNotFoundError: No module named 'fastapi'\n",
            1,
        );
        assert_eq!(
            p.diagnostic(),
            "ModuleNotFoundError: No module named 'fastapi'"
        );
    }

    #[test]
    fn diagnostic_falls_back_to_stdout_then_exit_code() {
        let p = probe("some output\n", "", 1);
        assert_eq!(p.diagnostic(), "some output");

        let p = probe("", "", 3);
        assert_eq!(p.diagnostic(), "exited with code 3");
    }

    #[test]
    fn missing_module_extracted_from_stderr() {
        let p = probe(
            "",
            "ModuleNotFoundError: No module named 'exa'\n",
            1,
        );
        assert_eq!(p.missing_module(), Some("exa".to_string()));
    }

    #[test]
    fn missing_module_absent_for_other_errors() {
        let p = probe("", "SyntaxError: invalid syntax\n", 1);
        assert_eq!(p.missing_module(), None);
    }

    #[test]
    fn locate_fails_for_unknown_interpreter() {
        let err = PythonInterpreter::locate("turnstile-no-such-python-x9z").unwrap_err();
        assert!(matches!(err, TurnstileError::InterpreterNotFound { .. }));
    }

    #[test]
    fn version_regex_matches_banner() {
        let caps = RE_PYTHON_VERSION.captures("Python 3.12.1").unwrap();
        assert_eq!(&caps[1], "3.12.1");

        let caps = RE_PYTHON_VERSION.captures("Python 3.13.0rc2").unwrap();
        assert_eq!(&caps[1], "3.13.0rc2");
    }

    #[cfg(unix)]
    mod with_stub_interpreter {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        fn stub(dir: &Path, body: &str) -> PythonInterpreter {
            let path = dir.join("python3");
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            PythonInterpreter::locate(path.to_str().unwrap()).unwrap()
        }

        #[test]
        fn version_parses_stub_banner() {
            let dir = tempfile::tempdir().unwrap();
            let py = stub(dir.path(), r#"echo "Python 3.12.1""#);
            assert_eq!(py.version().unwrap(), "3.12.1");
        }

        #[test]
        fn version_found_on_stderr() {
            let dir = tempfile::tempdir().unwrap();
            let py = stub(dir.path(), r#"echo "Python 2.7.18" >&2"#);
            assert_eq!(py.version().unwrap(), "2.7.18");
        }

        #[test]
        fn run_code_reports_success() {
            let dir = tempfile::tempdir().unwrap();
            let py = stub(dir.path(), "exit 0");
            let result = py.run_code("import fastapi", None).unwrap();
            assert!(result.success);
        }

        #[test]
        fn run_code_reports_failure_with_stderr() {
            let dir = tempfile::tempdir().unwrap();
            let py = stub(
                dir.path(),
                r#"echo "ModuleNotFoundError: No module named 'geopy'" >&2; exit 1"#,
            );
            let result = py.run_code("import geopy", None).unwrap();
            assert!(!result.success);
            assert_eq!(result.missing_module(), Some("geopy".to_string()));
        }

        #[test]
        fn check_import_runs_in_working_directory() {
            let dir = tempfile::tempdir().unwrap();
            let py = stub(dir.path(), "pwd");
            let project = tempfile::tempdir().unwrap();
            let result = py.check_import("main", Some(project.path())).unwrap();
            let reported = result.stdout.trim();
            let expected = project.path().canonicalize().unwrap();
            assert_eq!(
                std::path::Path::new(reported).canonicalize().unwrap(),
                expected
            );
        }
    }
}
