//! Notification port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Platform;

/// Notification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("{platform} notification backend unavailable: {reason}")]
    BackendUnavailable { platform: Platform, reason: String },

    #[error("{platform} notification failed: {detail}")]
    SendFailed { platform: Platform, detail: String },
}

/// How a successful display call went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The backend reported success
    Shown,
    /// The backend raised a known false failure; the note describes it
    ShownDespiteError(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `message` - The notification body
    /// * `icon` - Optional icon file; `None` uses the backend's default
    ///
    /// # Returns
    /// How the notification was delivered, or an error
    async fn display(
        &self,
        title: &str,
        message: &str,
        icon: Option<&Path>,
    ) -> Result<Delivery, NotificationError>;
}

/// Port for selecting the notifier that serves a platform
pub trait NotifierFactory: Send + Sync {
    type Notifier: Notifier;

    /// Build the notifier for `platform`.
    fn create(&self, platform: Platform) -> Self::Notifier;
}
