//! Results collected from a completed smoke run.

use std::time::Duration;

use serde_json::Value;

/// Counts and values gathered while walking the endpoint sequence.
///
/// Only populated fully when every check passed; on failure the run
/// aborts and the partial report is discarded.
#[derive(Debug, Clone, Default)]
pub struct SmokeReport {
    /// Elements returned by `/api/incidents`.
    pub incident_count: usize,
    /// Elements returned by `/api/alerts`.
    pub alert_count: usize,
    /// Elements returned by `/api/stations/safety-scores`.
    pub score_count: usize,
    /// Value of `current_safety_score` from the station lookup, if the
    /// field was present.
    pub safety_score: Option<Value>,
    /// Wall-clock time for the whole sequence.
    pub duration: Duration,
}

impl SmokeReport {
    /// Human-readable rendering of the safety score.
    pub fn safety_score_display(&self) -> String {
        match &self.safety_score {
            None | Some(Value::Null) => "not available".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
