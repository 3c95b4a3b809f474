//! Turnstile - environment and endpoint checks for the Transit Safety API.
//!
//! Turnstile is a CLI companion to a FastAPI service: `doctor` audits a
//! local checkout (files, packages, configuration, imports) and `smoke`
//! probes the HTTP endpoints of a running instance.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.env` parsing and API settings resolution
//! - [`doctor`] - Environment audit checks and reporting
//! - [`error`] - Error types and result aliases
//! - [`python`] - Python interpreter subprocess probes
//! - [`server`] - Development server launch
//! - [`smoke`] - Endpoint checks against a running server
//! - [`sys`] - Platform helpers (PATH lookup, CI detection)
//! - [`ui`] - Spinners, status icons, and terminal output
//!
//! # Example
//!
//! ```
//! use turnstile::smoke::station_safety_path;
//!
//! // Station names become one percent-encoded path segment
//! let path = station_safety_path("Times Square-42nd St");
//! assert_eq!(path, "/api/stations/Times%20Square-42nd%20St/safety");
//! ```

pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod python;
pub mod server;
pub mod smoke;
pub mod sys;
pub mod ui;

pub use error::{Result, TurnstileError};
