//! Smoke command implementation.
//!
//! The `turnstile smoke` command probes the HTTP endpoints of a
//! running Transit Safety API instance and reports what it found.

use std::time::Duration;

use crate::cli::args::SmokeArgs;
use crate::error::Result;
use crate::smoke::{ApiClient, SmokeRunner, STEP_COUNT};
use crate::ui::{format_duration, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The smoke command implementation.
pub struct SmokeCommand {
    args: SmokeArgs,
}

impl SmokeCommand {
    /// Create a new smoke command.
    pub fn new(args: SmokeArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SmokeArgs {
        &self.args
    }
}

impl Command for SmokeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Transit Safety API - Endpoint Checks");
        ui.message(&format!("Target: {}", self.args.base_url));

        let client =
            ApiClient::with_timeout(&self.args.base_url, Duration::from_secs(self.args.timeout));
        let runner = SmokeRunner::new(&client, &self.args.station);

        match runner.run(ui) {
            Ok(report) => {
                ui.message("");
                ui.message(&format!("Incidents: {}", report.incident_count));
                ui.message(&format!("Active alerts: {}", report.alert_count));
                ui.message(&format!("Station scores: {}", report.score_count));
                ui.message(&format!(
                    "{} safety score: {}",
                    self.args.station,
                    report.safety_score_display()
                ));
                ui.message("");
                ui.success(&format!(
                    "All {} endpoint checks passed ({})",
                    STEP_COUNT,
                    format_duration(report.duration)
                ));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.message("");
                ui.error(&format!("Endpoint checks failed: {}", e));
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use serde_json::json;

    fn args_for(server: &MockServer) -> SmokeArgs {
        SmokeArgs {
            base_url: server.base_url(),
            station: "Times Square-42nd St".to_string(),
            timeout: 5,
        }
    }

    fn mount_happy_mocks(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({"message": "ok"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/incidents");
            then.status(200).json_body(json!([{}, {}]));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/stations/Times%20Square-42nd%20St/safety");
            then.status(200).json_body(json!({"current_safety_score": 6.8}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/alerts");
            then.status(200).json_body(json!([{}]));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/research/trigger");
            then.status(200).json_body(json!({"status": "started"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/stations/safety-scores");
            then.status(200).json_body(json!([{}, {}, {}]));
        });
    }

    #[test]
    fn smoke_command_creation() {
        let server = MockServer::start();
        let cmd = SmokeCommand::new(args_for(&server));
        assert_eq!(cmd.args().timeout, 5);
    }

    #[test]
    fn passing_run_reports_counts_and_score() {
        let server = MockServer::start();
        mount_happy_mocks(&server);
        let cmd = SmokeCommand::new(args_for(&server));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success, "errors: {:?}", ui.errors());
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("Incidents: 2"));
        assert!(ui.has_message("Active alerts: 1"));
        assert!(ui.has_message("Station scores: 3"));
        assert!(ui.has_message("Times Square-42nd St safety score: 6.8"));
        assert!(ui.has_success("All 6 endpoint checks passed"));
    }

    #[test]
    fn failing_endpoint_exits_nonzero_and_names_the_step() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(503).body("down for maintenance");
        });
        let cmd = SmokeCommand::new(args_for(&server));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Root endpoint"));
        assert!(ui.has_error("503"));
    }
}
