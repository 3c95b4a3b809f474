//! Audit report aggregation.

/// Everything one audit pass learned, collected for the summary.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Interpreter version, when one was located.
    pub interpreter_version: Option<String>,
    /// Required files absent from the project.
    pub missing_files: Vec<String>,
    /// Required distributions that failed to import.
    pub missing_packages: Vec<String>,
    /// Required keys that are unset or placeholders.
    pub missing_keys: Vec<String>,
    /// Warning from an unreadable `.env` file, if any.
    pub env_file_warning: Option<String>,
    /// Whether the application entry point imported.
    pub entrypoint_ok: bool,
    /// Whether the persistence initializer imported.
    pub persistence_ok: bool,
}

impl DoctorReport {
    /// Overall verdict: every missing list empty and the entry point loads.
    ///
    /// The persistence import is deliberately excluded; the service runs
    /// (degraded) without its database.
    pub fn passed(&self) -> bool {
        self.missing_files.is_empty()
            && self.missing_packages.is_empty()
            && self.missing_keys.is_empty()
            && self.entrypoint_ok
    }

    /// Concrete next steps for whatever the audit found missing.
    pub fn remediation(&self) -> Vec<String> {
        let mut hints = Vec::new();
        if !self.missing_files.is_empty() {
            hints.push(
                "Restore the missing files from the repository before running the service"
                    .to_string(),
            );
        }
        if !self.missing_packages.is_empty() {
            hints.push("Run: pip install -r requirements.txt".to_string());
        }
        if !self.missing_keys.is_empty() {
            hints.push(format!(
                "Edit .env and set real values for: {}",
                self.missing_keys.join(", ")
            ));
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_report() -> DoctorReport {
        DoctorReport {
            interpreter_version: Some("3.12.1".to_string()),
            entrypoint_ok: true,
            persistence_ok: true,
            ..Default::default()
        }
    }

    #[test]
    fn clean_report_passes() {
        assert!(passing_report().passed());
    }

    #[test]
    fn any_missing_list_fails_the_report() {
        let mut report = passing_report();
        report.missing_files.push("main.py".to_string());
        assert!(!report.passed());

        let mut report = passing_report();
        report.missing_packages.push("exa_py".to_string());
        assert!(!report.passed());

        let mut report = passing_report();
        report.missing_keys.push("EXA_API_KEY".to_string());
        assert!(!report.passed());
    }

    #[test]
    fn failed_entrypoint_fails_the_report() {
        let mut report = passing_report();
        report.entrypoint_ok = false;
        assert!(!report.passed());
    }

    #[test]
    fn failed_persistence_import_does_not_fail_the_report() {
        let mut report = passing_report();
        report.persistence_ok = false;
        assert!(report.passed());
    }

    #[test]
    fn env_file_warning_does_not_fail_the_report() {
        let mut report = passing_report();
        report.env_file_warning = Some("Could not read .env: permission denied".to_string());
        assert!(report.passed());
    }

    #[test]
    fn remediation_names_the_install_command() {
        let mut report = passing_report();
        report.missing_packages.push("geopy".to_string());

        let hints = report.remediation();

        assert!(hints.iter().any(|h| h.contains("pip install")));
    }

    #[test]
    fn remediation_lists_unconfigured_keys() {
        let mut report = passing_report();
        report.missing_keys.push("EXA_API_KEY".to_string());
        report.missing_keys.push("CEREBRAS_API_KEY".to_string());

        let hints = report.remediation();

        assert!(hints
            .iter()
            .any(|h| h.contains("EXA_API_KEY, CEREBRAS_API_KEY")));
    }

    #[test]
    fn clean_report_needs_no_remediation() {
        assert!(passing_report().remediation().is_empty());
    }
}
