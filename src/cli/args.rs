//! CLI argument definitions using Clap

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;

use crate::domain::ALL_SEVERITIES;

/// hook-notify - desktop notifications for Claude Code hooks
///
/// Reads a hook event as JSON on stdin. Without one, shows
/// `<NOTIFICATION_TYPE> <MESSAGE>` from the command line.
#[derive(Parser, Debug)]
#[command(name = "hook-notify")]
#[command(version)]
#[command(about = "Cross-platform desktop notifications for Claude Code hook events")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification type (stop, permission, error, warning, info)
    #[arg(value_name = "NOTIFICATION_TYPE")]
    pub notification_type: Option<String>,

    /// Notification message
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Extra positional values are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Icon file to show instead of the bundled icon
    #[arg(long, value_name = "PATH", env = "HOOK_NOTIFY_ICON")]
    pub icon: Option<PathBuf>,

    /// Print the resolved notification without showing it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// The `(type, message)` pair for legacy mode, if both were given
    pub fn legacy_pair(&self) -> Option<(&str, &str)> {
        Some((self.notification_type.as_deref()?, self.message.as_deref()?))
    }
}

/// Usage text printed when legacy mode is missing arguments
pub fn usage_text() -> String {
    let mut text = String::from("Usage: hook-notify <notification_type> <message>\n\nNotification types:\n");
    for severity in ALL_SEVERITIES {
        let _ = writeln!(text, "  {:<11} - {}", severity.as_str(), severity.description());
    }
    text.push_str("\nExample:\n");
    text.push_str("  hook-notify stop \"Session has ended\"\n");
    text.push_str("  hook-notify permission \"Please review permissions\"\n");
    text.push_str("  echo '{\"hook_event_name\":\"Stop\"}' | hook-notify");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["hook-notify"]).unwrap();
        assert!(cli.notification_type.is_none());
        assert!(cli.message.is_none());
        assert!(!cli.dry_run);
        assert!(cli.legacy_pair().is_none());
    }

    #[test]
    fn cli_parses_legacy_pair() {
        let cli = Cli::try_parse_from(["hook-notify", "stop", "Session has ended"]).unwrap();
        assert_eq!(cli.legacy_pair(), Some(("stop", "Session has ended")));
    }

    #[test]
    fn cli_single_argument_is_not_a_pair() {
        let cli = Cli::try_parse_from(["hook-notify", "stop"]).unwrap();
        assert!(cli.legacy_pair().is_none());
    }

    #[test]
    fn cli_accepts_unknown_type() {
        let cli = Cli::try_parse_from(["hook-notify", "custom", "hello"]).unwrap();
        assert_eq!(cli.legacy_pair(), Some(("custom", "hello")));
    }

    #[test]
    fn cli_ignores_extra_values() {
        let cli = Cli::try_parse_from(["hook-notify", "info", "hello", "more", "stuff"]).unwrap();
        assert_eq!(cli.legacy_pair(), Some(("info", "hello")));
        assert_eq!(cli.extra, vec!["more", "stuff"]);
    }

    #[test]
    fn cli_message_after_separator_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["hook-notify", "--", "error", "-1 tests failed"]).unwrap();
        assert_eq!(cli.legacy_pair(), Some(("error", "-1 tests failed")));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "hook-notify",
            "--dry-run",
            "--icon",
            "/tmp/icon.png",
            "info",
            "hi",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.icon, Some(PathBuf::from("/tmp/icon.png")));
    }

    #[test]
    fn usage_lists_every_type() {
        let usage = usage_text();
        assert!(usage.starts_with("Usage: hook-notify <notification_type> <message>"));
        for name in ["stop", "permission", "error", "warning", "info"] {
            assert!(usage.contains(name), "usage is missing {name}");
        }
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
