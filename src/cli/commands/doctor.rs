//! Doctor command implementation.
//!
//! The `turnstile doctor` command audits the local environment of the
//! Transit Safety API: required files, importable packages, credential
//! keys, and the application import itself. With `--serve` it starts
//! the service once the audit passes.

use std::path::{Path, PathBuf};

use crate::cli::args::DoctorArgs;
use crate::config::ApiSettings;
use crate::doctor::{
    check_entrypoint, check_files, check_persistence, missing_dists, missing_paths, DoctorReport,
    PackageChecker, REQUIRED_KEYS,
};
use crate::error::{Result, TurnstileError};
use crate::python::PythonInterpreter;
use crate::server;
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The doctor command implementation.
pub struct DoctorCommand {
    project_root: PathBuf,
    args: DoctorArgs,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(project_root: &Path, args: DoctorArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DoctorArgs {
        &self.args
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(TurnstileError::ProjectNotFound {
                path: self.project_root.clone(),
            });
        }
        let project_root = self.project_root.canonicalize().map_err(TurnstileError::Io)?;

        ui.show_header("Transit Safety API - Environment Audit");
        ui.message(&format!("Project: {}", project_root.display()));

        let mut report = DoctorReport::default();

        let interpreter = match PythonInterpreter::locate(&self.args.python) {
            Ok(interp) => {
                report.interpreter_version = interp.version().ok();
                match &report.interpreter_version {
                    Some(version) => ui.success(&format!("Python {}", version)),
                    None => {
                        ui.success(&format!("Python interpreter at {}", interp.path().display()))
                    }
                }
                Some(interp)
            }
            Err(e) => {
                ui.warning(&e.to_string());
                None
            }
        };

        ui.message("");
        ui.message("Required files:");
        let file_checks = check_files(&project_root);
        for check in &file_checks {
            display::show_file_check(ui, check);
        }
        report.missing_files = missing_paths(&file_checks);

        ui.message("");
        ui.message("Python packages:");
        let package_checks =
            PackageChecker::new(interpreter.as_ref(), &project_root).check_all();
        for check in &package_checks {
            display::show_package_check(ui, check);
        }
        report.missing_packages = missing_dists(&package_checks);

        ui.message("");
        ui.message("Configuration:");
        let (settings, env_warning) = ApiSettings::load(&project_root);
        if let Some(warning) = env_warning {
            ui.warning(&warning);
            report.env_file_warning = Some(warning);
        }
        for key in REQUIRED_KEYS {
            let status = settings.key_status(key);
            display::show_key_status(ui, key, status, settings.source_of(key));
            if !status.is_configured() {
                report.missing_keys.push((*key).to_string());
            }
        }

        ui.message("");
        ui.message("Application imports:");
        match &interpreter {
            Some(interp) => {
                let entrypoint = check_entrypoint(interp, &project_root);
                report.entrypoint_ok = entrypoint.ok;
                if !entrypoint.ok {
                    let detail = entrypoint.detail.as_deref().unwrap_or("import error");
                    ui.error(&format!("{} failed: {}", entrypoint.statement, detail));
                    show_probe_output(ui, &entrypoint.stderr);
                    ui.error("Cannot continue: the application entry point does not load");
                    return Ok(CommandResult::failure(1));
                }
                ui.success(entrypoint.statement);

                let persistence = check_persistence(interp, &project_root);
                report.persistence_ok = persistence.ok;
                if persistence.ok {
                    ui.success(persistence.statement);
                } else {
                    let detail = persistence.detail.as_deref().unwrap_or("import error");
                    ui.warning(&format!("{} failed: {}", persistence.statement, detail));
                    show_probe_output(ui, &persistence.stderr);
                }
            }
            None => {
                ui.error("Cannot import the application: no Python interpreter available");
                return Ok(CommandResult::failure(1));
            }
        }

        ui.message("");
        ui.message("Summary:");
        for (kind, line) in summary_lines(&report) {
            ui.message(&format!("  {}", kind.format_plain(&line)));
        }

        ui.message("");
        if !report.passed() {
            ui.error("Environment audit failed");
            for hint in report.remediation() {
                ui.message(&format!("  {}", hint));
            }
            return Ok(CommandResult::failure(1));
        }
        ui.success("Environment audit passed");

        if self.args.serve {
            if let Some(interp) = &interpreter {
                ui.message("");
                ui.message(&format!("Starting server at {}", server::display_url()));
                if ui.is_interactive() {
                    ui.message("Press Ctrl-C to stop");
                }
                if let Err(e) = server::launch(interp, &project_root) {
                    ui.error(&e.to_string());
                    return Ok(CommandResult::failure(1));
                }
            }
        }

        Ok(CommandResult::success())
    }
}

/// Relay a probe's full stderr, indented, when verbose output is on.
fn show_probe_output(ui: &mut dyn UserInterface, stderr: &str) {
    if !ui.output_mode().shows_command_output() {
        return;
    }
    for line in stderr.lines() {
        ui.message(&format!("  {}", line));
    }
}

/// One summary line per audit area.
fn summary_lines(report: &DoctorReport) -> Vec<(StatusKind, String)> {
    let mut lines = Vec::new();

    if report.missing_files.is_empty() {
        lines.push((StatusKind::Success, "all required files present".to_string()));
    } else {
        lines.push((
            StatusKind::Failed,
            format!("missing files: {}", report.missing_files.join(", ")),
        ));
    }

    if report.missing_packages.is_empty() {
        lines.push((StatusKind::Success, "all packages importable".to_string()));
    } else {
        lines.push((
            StatusKind::Failed,
            format!("missing packages: {}", report.missing_packages.join(", ")),
        ));
    }

    if report.missing_keys.is_empty() {
        lines.push((StatusKind::Success, "API keys configured".to_string()));
    } else {
        lines.push((
            StatusKind::Failed,
            format!("unconfigured keys: {}", report.missing_keys.join(", ")),
        ));
    }

    if report.persistence_ok {
        lines.push((StatusKind::Success, "application imports".to_string()));
    } else {
        lines.push((
            StatusKind::Warning,
            "application imports (database initializer unavailable)".to_string(),
        ));
    }

    lines
}
