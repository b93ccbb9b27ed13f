//! CLI presenter for diagnostic output
//!
//! Every line goes to stdout with a bracketed tag; hooks capture stdout
//! as the transcript of what happened.

use colored::*;

use crate::application::{DispatchOutcome, ResolvedNotification};

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        println!("{} {}", "[INFO]".cyan(), message);
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "[SUCCESS]".green(), message);
    }

    /// Print warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "[WARNING]".yellow(), message);
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        println!("{} {}", "[ERROR]".red(), message);
    }

    /// Print failure status
    pub fn failed(&self, message: &str) {
        println!("{} {}", "[FAILED]".red(), message);
    }

    /// Output untagged text
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print everything decided before dispatch
    pub fn resolved(&self, resolved: &ResolvedNotification) {
        self.info(&format!("Platform: {}", resolved.platform_label()));
        self.info(&format!("Title: {}", resolved.title));
        self.info(&format!("Message: {}", resolved.message));
        self.info(&format!("Icon: {}", format_icon(resolved)));
    }

    /// Print the dispatch outcome, including its warning or cause
    pub fn outcome(&self, outcome: &DispatchOutcome) {
        if let Some(warning) = &outcome.warning {
            self.warn(warning);
        }
        if let Some(error) = &outcome.error {
            self.error(&error.to_string());
        }

        if outcome.success {
            self.success(outcome.status);
        } else {
            self.failed(outcome.status);
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_icon(resolved: &ResolvedNotification) -> String {
    match &resolved.icon {
        Some(path) => path.display().to_string(),
        None => "System default".to_string(),
    }
}
