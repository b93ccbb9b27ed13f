//! Notification infrastructure module
//!
//! One backend per platform, all built on notify-rust. The backend is picked
//! once per call by [`NativeNotifierFactory`] and wrapped in the closed
//! [`PlatformNotifier`] enum.

mod context;
#[cfg(test)]
mod fake;
mod linux;
mod macos;
mod notify_rust;
mod toast_quirks;
mod windows;

pub use context::{NotifierContext, ToastHandle};
pub use linux::{LinuxNotifier, FALLBACK_ICON};
pub use macos::MacOsNotifier;
pub use self::notify_rust::{NotifyRustSender, ToastRequest, ToastSendError, ToastSender};
pub use toast_quirks::{is_benign_toast_error, BENIGN_TOAST_ERROR_MARKERS};
pub use windows::{WindowsToastNotifier, TOAST_DURATION_MS};

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{Delivery, NotificationError, Notifier, NotifierFactory};
use crate::domain::{AppConfig, Platform};

/// The notifier for one platform
pub enum PlatformNotifier<S = NotifyRustSender> {
    Windows(WindowsToastNotifier<S>),
    MacOs(MacOsNotifier<S>),
    Linux(LinuxNotifier<S>),
}

#[cfg(test)]
impl<S> PlatformNotifier<S> {
    fn platform(&self) -> Platform {
        match self {
            Self::Windows(_) => Platform::Windows,
            Self::MacOs(_) => Platform::MacOs,
            Self::Linux(_) => Platform::Linux,
        }
    }
}

#[async_trait]
impl<S: ToastSender> Notifier for PlatformNotifier<S> {
    async fn display(
        &self,
        title: &str,
        message: &str,
        icon: Option<&Path>,
    ) -> Result<Delivery, NotificationError> {
        match self {
            Self::Windows(notifier) => notifier.display(title, message, icon).await,
            Self::MacOs(notifier) => notifier.display(title, message, icon).await,
            Self::Linux(notifier) => notifier.display(title, message, icon).await,
        }
    }
}

/// Builds native notifiers from the merged configuration
pub struct NativeNotifierFactory<S = NotifyRustSender> {
    sender: S,
    context: NotifierContext,
    app_name: String,
    timeout_ms: u32,
    sound: String,
    windows_app_id: Option<String>,
}

impl NativeNotifierFactory {
    /// Create a factory that sends through notify-rust
    pub fn new(config: &AppConfig) -> Self {
        Self::with_sender(config, NotifyRustSender::new())
    }
}

impl<S: ToastSender + Clone> NativeNotifierFactory<S> {
    /// Create a factory with a custom sender
    pub fn with_sender(config: &AppConfig, sender: S) -> Self {
        Self {
            sender,
            context: NotifierContext::new(),
            app_name: config.app_name_or_default().to_string(),
            timeout_ms: config.timeout_ms_or_default(),
            sound: config.sound_or_default().to_string(),
            windows_app_id: config.windows_app_id().map(str::to_string),
        }
    }
}

impl<S: ToastSender + Clone> NotifierFactory for NativeNotifierFactory<S> {
    type Notifier = PlatformNotifier<S>;

    fn create(&self, platform: Platform) -> PlatformNotifier<S> {
        let sender = self.sender.clone();
        match platform {
            Platform::Windows => {
                let handle = self.context.toast_handle(self.windows_app_id.as_deref());
                PlatformNotifier::Windows(
                    WindowsToastNotifier::new(handle, sender).with_duration_ms(self.timeout_ms),
                )
            }
            Platform::MacOs => {
                PlatformNotifier::MacOs(MacOsNotifier::new(sender).with_sound(self.sound.clone()))
            }
            Platform::Linux => PlatformNotifier::Linux(
                LinuxNotifier::new(sender)
                    .with_app_name(self.app_name.clone())
                    .with_timeout_ms(self.timeout_ms),
            ),
        }
    }
}
