//! Domain layer - Core business logic
//!
//! Contains value objects, the event classifier, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod event;
pub mod platform;
pub mod severity;
pub mod text;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use event::{HookEvent, NotificationIntent};
pub use platform::Platform;
pub use severity::{Severity, ALL_SEVERITIES, APP_NAME};
