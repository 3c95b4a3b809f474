//! Configuration loading for the target project.
//!
//! The audited project carries its configuration in a `.env` file at the
//! project root. This module parses that file and resolves the required
//! API credentials into an explicit [`ApiSettings`] value object:
//! - KEY=value parsing in [`env_file`]
//! - Credential resolution and placeholder detection in [`settings`]

pub mod env_file;
pub mod settings;

pub use env_file::EnvFileParser;
pub use settings::{ApiSettings, KeyStatus, SettingSource};
