//! Per-process notifier context
//!
//! Holds the Windows toast handle, created on first use and reused for the
//! rest of the process.

use std::sync::OnceLock;

use crate::application::ports::NotificationError;
use crate::domain::Platform;

/// Handle the Windows toast backend needs before it can show anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastHandle {
    /// Application User Model ID; `None` uses the library's PowerShell id
    app_id: Option<String>,
}

impl ToastHandle {
    /// Create a toast handle for an optional app id.
    ///
    /// A configured but blank app id cannot be registered with the toast
    /// manager and fails here.
    pub fn initialize(app_id: Option<&str>) -> Result<Self, NotificationError> {
        match app_id.map(str::trim) {
            Some("") => Err(NotificationError::BackendUnavailable {
                platform: Platform::Windows,
                reason: "toast app id is empty. Set windows.app_id in the config file \
                         to a registered AppUserModelID, or remove it"
                    .to_string(),
            }),
            Some(id) => Ok(Self {
                app_id: Some(id.to_string()),
            }),
            None => Ok(Self { app_id: None }),
        }
    }

    /// The app id toasts are attributed to
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }
}

/// Explicit replacement for process-wide notifier state
#[derive(Debug, Default)]
pub struct NotifierContext {
    toast_handle: OnceLock<Result<ToastHandle, NotificationError>>,
}

impl NotifierContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the toast handle, initializing it on first use.
    ///
    /// The outcome of the first initialization is kept, including failure.
    pub fn toast_handle(&self, app_id: Option<&str>) -> Result<ToastHandle, NotificationError> {
        self.toast_handle
            .get_or_init(|| ToastHandle::initialize(app_id))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_without_app_id() {
        let handle = ToastHandle::initialize(None).unwrap();
        assert_eq!(handle.app_id(), None);
    }

    #[test]
    fn initialize_trims_app_id() {
        let handle = ToastHandle::initialize(Some("  Anthropic.ClaudeCode ")).unwrap();
        assert_eq!(handle.app_id(), Some("Anthropic.ClaudeCode"));
    }

    #[test]
    fn blank_app_id_fails() {
        let err = ToastHandle::initialize(Some("   ")).unwrap_err();
        assert!(matches!(
            err,
            NotificationError::BackendUnavailable {
                platform: Platform::Windows,
                ..
            }
        ));
        assert!(err.to_string().contains("windows.app_id"));
    }

    #[test]
    fn context_initializes_once() {
        let context = NotifierContext::new();
        let first = context.toast_handle(Some("First.App")).unwrap();
        let second = context.toast_handle(Some("Second.App")).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.app_id(), Some("First.App"));
    }

    #[test]
    fn context_remembers_failure() {
        let context = NotifierContext::new();
        assert!(context.toast_handle(Some("")).is_err());
        assert!(context.toast_handle(Some("Valid.App")).is_err());
    }
}
