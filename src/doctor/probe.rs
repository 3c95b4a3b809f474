//! Application import smoke tests.
//!
//! File and package checks can all pass while the service still dies on
//! startup (syntax errors, bad top-level config reads, circular
//! imports). Importing the entry point from the project directory
//! catches that whole class before anything tries to serve.

use std::path::Path;

use crate::python::PythonInterpreter;

use super::manifest::{ENTRYPOINT_IMPORT, PERSISTENCE_IMPORT};

/// Outcome of one import smoke test.
#[derive(Debug)]
pub struct ImportCheck {
    /// The import statement that was executed.
    pub statement: &'static str,
    /// Whether the import succeeded.
    pub ok: bool,
    /// Diagnostic for failed imports.
    pub detail: Option<String>,
    /// Full stderr from the probe, for verbose output.
    pub stderr: String,
}

/// Import the service's application object (`from main import app`).
///
/// This is the one check whose failure aborts the audit: nothing can
/// run if the app module does not load.
pub fn check_entrypoint(interpreter: &PythonInterpreter, project_root: &Path) -> ImportCheck {
    run_statement(interpreter, project_root, ENTRYPOINT_IMPORT)
}

/// Import the persistence initializer (`from database import create_tables`).
///
/// Failure is reported but tolerated; the service degrades without its
/// database rather than refusing to start.
pub fn check_persistence(interpreter: &PythonInterpreter, project_root: &Path) -> ImportCheck {
    run_statement(interpreter, project_root, PERSISTENCE_IMPORT)
}

fn run_statement(
    interpreter: &PythonInterpreter,
    project_root: &Path,
    statement: &'static str,
) -> ImportCheck {
    match interpreter.run_code(statement, Some(project_root)) {
        Ok(probe) if probe.success => ImportCheck {
            statement,
            ok: true,
            detail: None,
            stderr: probe.stderr,
        },
        Ok(probe) => ImportCheck {
            statement,
            ok: false,
            detail: Some(probe.diagnostic()),
            stderr: probe.stderr,
        },
        Err(e) => ImportCheck {
            statement,
            ok: false,
            detail: Some(e.to_string()),
            stderr: String::new(),
        },
    }
}
