//! Linux (freedesktop) notification adapter

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{Delivery, NotificationError, Notifier};
use crate::domain::config::DEFAULT_TIMEOUT_MS;
use crate::domain::{Platform, APP_NAME};

use super::notify_rust::{NotifyRustSender, ToastRequest, ToastSender};

/// Freedesktop icon used when no icon file was found
pub const FALLBACK_ICON: &str = "dialog-information";

/// Linux notifier talking to the freedesktop notification service
pub struct LinuxNotifier<S = NotifyRustSender> {
    sender: S,
    app_name: String,
    timeout_ms: u32,
}

impl<S: ToastSender> LinuxNotifier<S> {
    /// Create a notifier tagged "Claude Code" with a 5000 ms timeout
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            app_name: APP_NAME.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Create with custom app name
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Override the expiry timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[async_trait]
impl<S: ToastSender> Notifier for LinuxNotifier<S> {
    async fn display(
        &self,
        title: &str,
        message: &str,
        icon: Option<&Path>,
    ) -> Result<Delivery, NotificationError> {
        let icon = match icon {
            Some(path) => path.to_string_lossy().into_owned(),
            None => FALLBACK_ICON.to_string(),
        };

        let request = ToastRequest {
            title: title.to_owned(),
            message: message.to_owned(),
            icon: Some(icon),
            app_name: Some(self.app_name.clone()),
            timeout_ms: Some(self.timeout_ms),
            ..Default::default()
        };

        self.sender
            .send(request)
            .await
            .map(|()| Delivery::Shown)
            .map_err(|e| NotificationError::SendFailed {
                platform: Platform::Linux,
                detail: format!("{} (is a notification daemon running?)", e),
            })
    }
}
