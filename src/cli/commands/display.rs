//! Shared display helpers for audit check lines.
//!
//! These helpers render file, package and configuration-key checks
//! consistently: passing checks go through `success`, failing ones
//! through `error`, and unresolvable ones through `skipped`.

use crate::config::{KeyStatus, SettingSource};
use crate::doctor::{FileCheck, PackageCheck};
use crate::ui::{StatusKind, UserInterface};

/// Print a single required-file check line.
pub fn show_file_check(ui: &mut dyn UserInterface, check: &FileCheck) {
    let line = format!("{} ({})", check.file.path, check.file.role);
    if check.present {
        ui.success(&line);
    } else {
        ui.error(&format!("{} is missing", line));
    }
}

/// Print a single package import check line.
pub fn show_package_check(ui: &mut dyn UserInterface, check: &PackageCheck) {
    let name = check.package.dist_name;
    match StatusKind::from(check.status) {
        StatusKind::Success => ui.success(name),
        StatusKind::Skipped => match &check.detail {
            Some(detail) => ui.skipped(&format!("{} ({})", name, detail)),
            None => ui.skipped(name),
        },
        _ => match &check.detail {
            Some(detail) => ui.error(&format!("{}: {}", name, detail)),
            None => ui.error(name),
        },
    }
}

/// Print a single configuration key check line.
pub fn show_key_status(
    ui: &mut dyn UserInterface,
    key: &str,
    status: KeyStatus,
    source: Option<SettingSource>,
) {
    match StatusKind::from(status) {
        StatusKind::Success => match source {
            Some(src) => ui.success(&format!("{} (from {})", key, src)),
            None => ui.success(key),
        },
        _ => match status {
            KeyStatus::Placeholder => {
                ui.error(&format!("{} is still the placeholder value", key))
            }
            _ => ui.error(&format!("{} is not set", key)),
        },
    }
}
