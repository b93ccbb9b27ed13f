//! hook-notify - desktop notifications for Claude Code hook events
//!
//! Turns a hook event (JSON on stdin) or a `<type> <message>` pair into a
//! native desktop notification on Windows, macOS or Linux.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Hook events and their classification, severities, platforms, config
//! - **Application**: The dispatch use case and port interfaces (traits)
//! - **Infrastructure**: Native notification backends, config store, icon lookup
//! - **CLI**: Argument parsing, stdin input, and diagnostic output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
