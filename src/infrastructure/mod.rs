//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the native notification services, the config
//! file and the icon files shipped next to the binary.

pub mod config;
pub mod icon;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use icon::IconLocator;
pub use notification::{NativeNotifierFactory, PlatformNotifier};
