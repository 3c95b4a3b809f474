//! The ordered sequence of endpoint checks.
//!
//! Each step records the request to make and what the response body
//! must contain. The runner walks the sequence in order and stops at
//! the first failure, so a broken root endpoint is reported before
//! any of the data endpoints are tried.

/// Number of checks in the sequence.
pub const STEP_COUNT: usize = 6;

/// Station used for the safety lookup when none is given.
pub const DEFAULT_STATION: &str = "Times Square-42nd St";

/// HTTP method for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMethod {
    Get,
    Post,
}

impl StepMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepMethod::Get => "GET",
            StepMethod::Post => "POST",
        }
    }
}

/// Which collection an array-shaped response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Incidents,
    Alerts,
    SafetyScores,
}

impl Collection {
    /// Noun used when reporting the element count.
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Incidents => "incidents",
            Collection::Alerts => "alerts",
            Collection::SafetyScores => "station scores",
        }
    }
}

/// What the response body must look like for a step to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyExpectation {
    /// Only the HTTP status matters.
    StatusOnly,
    /// Body must be a JSON array; its length is recorded.
    Array(Collection),
    /// Body must be a JSON object; `current_safety_score` is recorded
    /// when present.
    StationSafety,
}

/// One endpoint check in the smoke sequence.
#[derive(Debug, Clone)]
pub struct EndpointStep {
    pub label: &'static str,
    pub method: StepMethod,
    pub path: String,
    pub expect: BodyExpectation,
}

/// Path for a station safety lookup, with the station name
/// percent-encoded so spaces and punctuation survive as one segment.
pub fn station_safety_path(station: &str) -> String {
    format!("/api/stations/{}/safety", urlencoding::encode(station))
}

/// The six checks, in execution order.
pub fn endpoint_steps(station: &str) -> Vec<EndpointStep> {
    vec![
        EndpointStep {
            label: "Root endpoint",
            method: StepMethod::Get,
            path: "/".to_string(),
            expect: BodyExpectation::StatusOnly,
        },
        EndpointStep {
            label: "Incident list",
            method: StepMethod::Get,
            path: "/api/incidents".to_string(),
            expect: BodyExpectation::Array(Collection::Incidents),
        },
        EndpointStep {
            label: "Station safety",
            method: StepMethod::Get,
            path: station_safety_path(station),
            expect: BodyExpectation::StationSafety,
        },
        EndpointStep {
            label: "Alert list",
            method: StepMethod::Get,
            path: "/api/alerts".to_string(),
            expect: BodyExpectation::Array(Collection::Alerts),
        },
        EndpointStep {
            label: "Research trigger",
            method: StepMethod::Post,
            path: "/api/research/trigger".to_string(),
            expect: BodyExpectation::StatusOnly,
        },
        EndpointStep {
            label: "Safety scores",
            method: StepMethod::Get,
            path: "/api/stations/safety-scores".to_string(),
            expect: BodyExpectation::Array(Collection::SafetyScores),
        },
    ]
}
