//! Resolved API credential settings.
//!
//! Settings are resolved once into an explicit value object instead of
//! mutating the process environment. The process environment takes
//! precedence over the project's `.env` file, matching what the target
//! service sees when python-dotenv loads without override.

use std::collections::HashMap;
use std::path::Path;

use crate::config::EnvFileParser;

/// Where a resolved setting value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    /// The process environment.
    Process,
    /// The project's `.env` file.
    EnvFile,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Process => write!(f, "environment"),
            Self::EnvFile => write!(f, ".env"),
        }
    }
}

/// Configuration state of a single required key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    /// Non-empty value that is not a placeholder.
    Set,
    /// Value equals the key's own name, i.e. never filled in.
    Placeholder,
    /// Absent or empty.
    Unset,
}

impl KeyStatus {
    /// Check whether the key counts as actually configured.
    pub fn is_configured(self) -> bool {
        matches!(self, Self::Set)
    }
}

/// API credential settings resolved from the environment and `.env`.
#[derive(Debug, Clone, Default)]
pub struct ApiSettings {
    process: HashMap<String, String>,
    env_file: HashMap<String, String>,
}

impl ApiSettings {
    /// Build settings from explicit source maps (process wins).
    pub fn new(process: HashMap<String, String>, env_file: HashMap<String, String>) -> Self {
        Self { process, env_file }
    }

    /// Resolve settings for a project: snapshot the process environment
    /// and read the project's `.env` if present.
    ///
    /// An unreadable `.env` yields the error message alongside settings
    /// resolved from the process environment alone, so a corrupt file
    /// degrades to a warning instead of aborting the audit.
    pub fn load(project_root: &Path) -> (Self, Option<String>) {
        let process: HashMap<String, String> = std::env::vars().collect();
        let env_path = project_root.join(".env");

        match EnvFileParser::load_optional(&env_path) {
            Ok(env_file) => (Self::new(process, env_file), None),
            Err(e) => (
                Self::new(process, HashMap::new()),
                Some(format!("Could not read {}: {}", env_path.display(), e)),
            ),
        }
    }

    /// Get the resolved value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.process
            .get(key)
            .or_else(|| self.env_file.get(key))
            .map(String::as_str)
    }

    /// Get the source the resolved value came from.
    pub fn source_of(&self, key: &str) -> Option<SettingSource> {
        if self.process.contains_key(key) {
            Some(SettingSource::Process)
        } else if self.env_file.contains_key(key) {
            Some(SettingSource::EnvFile)
        } else {
            None
        }
    }

    /// Classify a key as set, placeholder, or unset.
    ///
    /// A value literally equal to the key's own name is a placeholder:
    /// a template `.env` shipped as `EXA_API_KEY=EXA_API_KEY` was never
    /// filled in with a real credential.
    pub fn key_status(&self, key: &str) -> KeyStatus {
        match self.get(key) {
            None => KeyStatus::Unset,
            Some(value) if value.is_empty() => KeyStatus::Unset,
            Some(value) if value == key => KeyStatus::Placeholder,
            Some(_) => KeyStatus::Set,
        }
    }
}
