//! Development server launch.
//!
//! A passing audit can hand off directly to the service itself. The
//! launch is the uvicorn command line the project's own `run.py` uses,
//! run in the foreground until the server exits.

use std::path::Path;

use crate::error::{Result, TurnstileError};
use crate::python::PythonInterpreter;

/// Interface the launched server binds.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Port the service serves on.
pub const SERVER_PORT: u16 = 8000;

/// Launch the service in the foreground and wait for it to exit.
///
/// Any launch failure (spawn error, non-zero exit) is reported as
/// [`TurnstileError::ServerLaunchFailed`] rather than propagated as a
/// panic; the caller decides how to present it.
pub fn launch(interpreter: &PythonInterpreter, project_root: &Path) -> Result<()> {
    let port = SERVER_PORT.to_string();
    let args = [
        "main:app",
        "--host",
        SERVER_HOST,
        "--port",
        &port,
        "--log-level",
        "info",
    ];

    let status = interpreter
        .run_module("uvicorn", &args, project_root)
        .map_err(|e| TurnstileError::ServerLaunchFailed {
            message: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        let detail = match status.code() {
            Some(code) => format!("uvicorn exited with code {}", code),
            None => "uvicorn terminated by signal".to_string(),
        };
        Err(TurnstileError::ServerLaunchFailed { message: detail })
    }
}

/// The address users can reach the launched server on.
pub fn display_url() -> String {
    format!("http://localhost:{}", SERVER_PORT)
}
