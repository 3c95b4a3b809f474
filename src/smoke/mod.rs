//! Endpoint smoke testing against a running API server.
//!
//! The smoke test drives the HTTP surface of the service: six checks
//! in a fixed order, each requiring HTTP 200 and, where the endpoint
//! returns data, a body of the right shape. The first failure aborts
//! the run so the earliest broken endpoint is the one reported.

pub mod client;
pub mod report;
pub mod runner;
pub mod steps;

pub use client::ApiClient;
pub use report::SmokeReport;
pub use runner::SmokeRunner;
pub use steps::{
    endpoint_steps, station_safety_path, BodyExpectation, Collection, EndpointStep, StepMethod,
    DEFAULT_STATION, STEP_COUNT,
};
