//! Native toast sender using notify-rust
//!
//! notify-rust compiles to WinRT toasts on Windows, `NSUserNotification`
//! on macOS and the freedesktop D-Bus service on Linux.

use async_trait::async_trait;
use thiserror::Error;

/// Error text raised by the native notification call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ToastSendError(pub String);

/// A fully-specified native notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: String,
    pub message: String,
    /// Icon file path or freedesktop icon name; not shown on macOS
    pub icon: Option<String>,
    /// Context tag shown as the sending application
    pub app_name: Option<String>,
    /// Display duration; `None` keeps the library default
    pub timeout_ms: Option<u32>,
    /// Sound cue name
    pub sound: Option<String>,
    /// Windows Application User Model ID
    pub app_id: Option<String>,
}

/// Port for the single blocking call into the OS notification subsystem
#[async_trait]
pub trait ToastSender: Send + Sync {
    async fn send(&self, request: ToastRequest) -> Result<(), ToastSendError>;
}

/// Sends toasts through notify-rust
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyRustSender;

impl NotifyRustSender {
    /// Create a new notify-rust sender
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToastSender for NotifyRustSender {
    async fn send(&self, request: ToastRequest) -> Result<(), ToastSendError> {
        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || show(&request))
            .await
            .map_err(|e| ToastSendError(format!("Task join error: {}", e)))?
    }
}

fn show(request: &ToastRequest) -> Result<(), ToastSendError> {
    let mut notification = notify_rust::Notification::new();
    notification.summary(&request.title).body(&request.message);

    if let Some(app_name) = &request.app_name {
        notification.appname(app_name);
    }
    if let Some(timeout_ms) = request.timeout_ms {
        notification.timeout(notify_rust::Timeout::Milliseconds(timeout_ms));
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(app_id) = &request.app_id {
            notification.app_id(app_id);
        }
        if let Some(icon) = &request.icon {
            notification.image_path(icon);
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Some(sound) = &request.sound {
            notification.sound_name(sound);
        }
    }
    // The macOS backend ignores the icon and always shows the sending
    // application's own icon.
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(icon) = &request.icon {
            notification.icon(icon);
        }
    }

    notification
        .show()
        .map(|_| ())
        .map_err(|e| ToastSendError(e.to_string()))
}
