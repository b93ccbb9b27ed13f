//! macOS notification adapter

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{Delivery, NotificationError, Notifier};
use crate::domain::config::DEFAULT_SOUND;
use crate::domain::Platform;

use super::notify_rust::{NotifyRustSender, ToastRequest, ToastSender};

/// macOS notifier. No persistent handle; every call goes straight to the
/// native notification center.
pub struct MacOsNotifier<S = NotifyRustSender> {
    sender: S,
    sound: String,
}

impl<S: ToastSender> MacOsNotifier<S> {
    /// Create a notifier that plays the default sound
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            sound: DEFAULT_SOUND.to_string(),
        }
    }

    /// Use a different sound cue
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = sound.into();
        self
    }
}

#[async_trait]
impl<S: ToastSender> Notifier for MacOsNotifier<S> {
    async fn display(
        &self,
        title: &str,
        message: &str,
        icon: Option<&Path>,
    ) -> Result<Delivery, NotificationError> {
        let request = ToastRequest {
            title: title.to_owned(),
            message: message.to_owned(),
            icon: icon.map(|p| p.to_string_lossy().into_owned()),
            sound: Some(self.sound.clone()),
            ..Default::default()
        };

        self.sender
            .send(request)
            .await
            .map(|()| Delivery::Shown)
            .map_err(|e| NotificationError::SendFailed {
                platform: Platform::MacOs,
                detail: e.to_string(),
            })
    }
}
