//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons used
//! across all commands and display contexts.

/// Canonical status kinds used across all Turnstile output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check completed successfully.
    Success,
    /// Check failed.
    Failed,
    /// Check was skipped.
    Skipped,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Skipped => "[skip]",
            Self::Warning => "[warn]",
        }
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<crate::doctor::PackageStatus> for StatusKind {
    fn from(status: crate::doctor::PackageStatus) -> Self {
        match status {
            crate::doctor::PackageStatus::Importable => Self::Success,
            crate::doctor::PackageStatus::Missing => Self::Failed,
            crate::doctor::PackageStatus::Skipped => Self::Skipped,
        }
    }
}

impl From<crate::config::KeyStatus> for StatusKind {
    fn from(status: crate::config::KeyStatus) -> Self {
        match status {
            crate::config::KeyStatus::Set => Self::Success,
            crate::config::KeyStatus::Placeholder => Self::Failed,
            crate::config::KeyStatus::Unset => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 4] = [
        StatusKind::Success,
        StatusKind::Failed,
        StatusKind::Skipped,
        StatusKind::Warning,
    ];

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Skipped.icon(), "○");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn bracketed_returns_text_labels() {
        assert_eq!(StatusKind::Success.bracketed(), "[ok]");
        assert_eq!(StatusKind::Failed.bracketed(), "[FAIL]");
        assert_eq!(StatusKind::Skipped.bracketed(), "[skip]");
        assert_eq!(StatusKind::Warning.bracketed(), "[warn]");
    }

    #[test]
    fn format_plain_uses_brackets() {
        let result = StatusKind::Failed.format_plain("database.py");
        assert_eq!(result, "[FAIL] database.py");
    }

    #[test]
    fn from_package_status() {
        use crate::doctor::PackageStatus;

        assert_eq!(
            StatusKind::from(PackageStatus::Importable),
            StatusKind::Success
        );
        assert_eq!(StatusKind::from(PackageStatus::Missing), StatusKind::Failed);
        assert_eq!(
            StatusKind::from(PackageStatus::Skipped),
            StatusKind::Skipped
        );
    }

    #[test]
    fn from_key_status() {
        use crate::config::KeyStatus;

        assert_eq!(StatusKind::from(KeyStatus::Set), StatusKind::Success);
        assert_eq!(StatusKind::from(KeyStatus::Placeholder), StatusKind::Failed);
        assert_eq!(StatusKind::from(KeyStatus::Unset), StatusKind::Failed);
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let icons: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();

        let mut unique = icons.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), icons.len(), "All icons should be unique");
    }
}
