//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::smoke::DEFAULT_STATION;

/// Turnstile - environment and endpoint checks for the Transit Safety API.
#[derive(Debug, Parser)]
#[command(name = "turnstile")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output, including full probe tracebacks
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit project files, packages and configuration (default if no command specified)
    #[command(visible_alias = "audit")]
    Doctor(DoctorArgs),

    /// Probe the API endpoints of a running server
    Smoke(SmokeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DoctorArgs {
    /// Python interpreter to probe with
    #[arg(long, default_value = "python3", value_name = "PYTHON")]
    pub python: String,

    /// Start the API server after all checks pass
    #[arg(long)]
    pub serve: bool,
}

impl Default for DoctorArgs {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            serve: false,
        }
    }
}

/// Arguments for the `smoke` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SmokeArgs {
    /// Base URL of the running server
    #[arg(
        long,
        env = "TURNSTILE_BASE_URL",
        default_value = "http://localhost:8000",
        value_name = "URL"
    )]
    pub base_url: String,

    /// Station name for the safety lookup
    #[arg(long, default_value = DEFAULT_STATION, value_name = "NAME")]
    pub station: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_name = "SECONDS")]
    pub timeout: u64,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
