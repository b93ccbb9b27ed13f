//! Windows toast notification adapter

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{Delivery, NotificationError, Notifier};
use crate::domain::Platform;

use super::context::ToastHandle;
use super::notify_rust::{NotifyRustSender, ToastRequest, ToastSender};
use super::toast_quirks::is_benign_toast_error;

/// Toast display duration
pub const TOAST_DURATION_MS: u32 = 5000;

/// Windows toast notifier
pub struct WindowsToastNotifier<S = NotifyRustSender> {
    handle: Result<ToastHandle, NotificationError>,
    sender: S,
    duration_ms: u32,
}

impl<S: ToastSender> WindowsToastNotifier<S> {
    /// Create a notifier from the process toast handle (or its init failure)
    pub fn new(handle: Result<ToastHandle, NotificationError>, sender: S) -> Self {
        Self {
            handle,
            sender,
            duration_ms: TOAST_DURATION_MS,
        }
    }

    /// Override the display duration
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[async_trait]
impl<S: ToastSender> Notifier for WindowsToastNotifier<S> {
    async fn display(
        &self,
        title: &str,
        message: &str,
        icon: Option<&Path>,
    ) -> Result<Delivery, NotificationError> {
        let handle = self.handle.as_ref().map_err(NotificationError::clone)?;

        let request = ToastRequest {
            title: title.to_owned(),
            message: message.to_owned(),
            icon: icon.map(|p| p.to_string_lossy().into_owned()),
            timeout_ms: Some(self.duration_ms),
            app_id: handle.app_id().map(str::to_owned),
            ..Default::default()
        };

        match self.sender.send(request).await {
            Ok(()) => Ok(Delivery::Shown),
            Err(e) if is_benign_toast_error(&e.0) => Ok(Delivery::ShownDespiteError(format!(
                "Ignoring known Windows toast bug: {}",
                e
            ))),
            Err(e) => Err(NotificationError::SendFailed {
                platform: Platform::Windows,
                detail: e.to_string(),
            }),
        }
    }
}
