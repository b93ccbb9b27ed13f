//! Notification severity value object

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Program name used as the generic notification title
pub const APP_NAME: &str = "Claude Code";

/// All recognized severities, in the order they are listed in usage text
pub const ALL_SEVERITIES: &[Severity] = &[
    Severity::Stop,
    Severity::Permission,
    Severity::Error,
    Severity::Warning,
    Severity::Info,
];

/// Notification category, used to select the display title.
///
/// Unrecognized type strings are kept in [`Severity::Other`] rather than
/// rejected; they display with the bare program name as title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Stop,
    Permission,
    Error,
    Warning,
    #[default]
    Info,
    Other(String),
}

impl Severity {
    /// Get the notification title for this severity
    pub fn title(&self) -> &'static str {
        match self {
            Self::Stop => "Claude Code - Session Ending",
            Self::Permission => "Claude Code - Permission Required",
            Self::Error => "Claude Code - Error",
            Self::Warning => "Claude Code - Warning",
            Self::Info => "Claude Code - Information",
            Self::Other(_) => APP_NAME,
        }
    }

    /// Get the one-line description shown in usage text
    pub fn description(&self) -> &'static str {
        match self {
            Self::Stop => "Session ending notification",
            Self::Permission => "Permission required notification",
            Self::Error => "Error notification",
            Self::Warning => "Warning notification",
            Self::Info => "Information notification",
            Self::Other(_) => "Generic notification",
        }
    }

    /// Get the string identifier for this severity
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stop => "stop",
            Self::Permission => "permission",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Other(raw) => raw,
        }
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s {
            "stop" => Self::Stop,
            "permission" => Self::Permission,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
