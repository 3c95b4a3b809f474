//! Sequential execution of the endpoint checks.

use std::time::Instant;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TurnstileError};
use crate::smoke::{
    endpoint_steps, ApiClient, BodyExpectation, Collection, EndpointStep, SmokeReport, StepMethod,
    STEP_COUNT,
};
use crate::ui::UserInterface;

/// Fields read from the station safety response. The endpoint returns
/// more (station name, incident history), but only the score is
/// reported here, and it may be absent for stations without data.
#[derive(Debug, Deserialize)]
struct StationSafetyBody {
    current_safety_score: Option<Value>,
}

/// Walks the endpoint sequence against a running server.
///
/// Checks run in order and the first failure aborts the run, so the
/// reported error always points at the earliest broken endpoint.
pub struct SmokeRunner<'a> {
    client: &'a ApiClient,
    station: String,
}

impl<'a> SmokeRunner<'a> {
    /// Create a runner probing the given station in the safety lookup.
    pub fn new(client: &'a ApiClient, station: &str) -> Self {
        Self {
            client,
            station: station.to_string(),
        }
    }

    /// Run all checks, stopping at the first failure.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SmokeReport> {
        let started = Instant::now();
        let mut report = SmokeReport::default();

        for (index, step) in endpoint_steps(&self.station).iter().enumerate() {
            let mut spinner = ui.start_spinner(&format!(
                "[{}/{}] {} {}",
                index + 1,
                STEP_COUNT,
                step.method.as_str(),
                step.path
            ));

            match self.run_step(step, &mut report) {
                Ok(outcome) => spinner.finish_success(&outcome),
                Err(e) => {
                    spinner.finish_error(&format!("{} failed", step.label));
                    return Err(e);
                }
            }
        }

        report.duration = started.elapsed();
        Ok(report)
    }

    fn run_step(&self, step: &EndpointStep, report: &mut SmokeReport) -> Result<String> {
        let response = match step.method {
            StepMethod::Get => self.client.get(&step.path),
            StepMethod::Post => self.client.post(&step.path),
        }
        .map_err(|e| TurnstileError::EndpointRequest {
            step: step.label.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TurnstileError::EndpointStatus {
                step: step.label.to_string(),
                status: status.as_u16(),
            });
        }

        match step.expect {
            BodyExpectation::StatusOnly => Ok(format!("{} OK", step.label)),
            BodyExpectation::Array(collection) => {
                let items: Vec<Value> =
                    response.json().map_err(|_| TurnstileError::EndpointBody {
                        step: step.label.to_string(),
                        message: "expected a JSON array".to_string(),
                    })?;

                match collection {
                    Collection::Incidents => report.incident_count = items.len(),
                    Collection::Alerts => report.alert_count = items.len(),
                    Collection::SafetyScores => report.score_count = items.len(),
                }

                Ok(format!(
                    "{} OK ({} {})",
                    step.label,
                    items.len(),
                    collection.noun()
                ))
            }
            BodyExpectation::StationSafety => {
                let body: StationSafetyBody =
                    response.json().map_err(|_| TurnstileError::EndpointBody {
                        step: step.label.to_string(),
                        message: "expected a JSON object".to_string(),
                    })?;

                report.safety_score = body.current_safety_score;

                Ok(format!(
                    "{} OK (score {})",
                    step.label,
                    report.safety_score_display()
                ))
            }
        }
    }
}
