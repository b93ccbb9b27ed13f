//! CLI layer - Command-line interface
//!
//! Contains argument parsing, stdin hook input, output formatting,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod hook_input;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run, show_notification};
pub use args::{usage_text, Cli};
pub use hook_input::read_hook_event;
pub use presenter::Presenter;
