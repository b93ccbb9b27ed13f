//! Dispatch notification use case

use std::env;
use std::path::PathBuf;

use crate::domain::{Platform, Severity};

use super::ports::{Delivery, NotificationError, Notifier, NotifierFactory};

/// Exit code for a displayed notification
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for any failure
pub const EXIT_FAILURE: u8 = 1;

/// Input parameters for the dispatch use case
#[derive(Debug, Clone, Default)]
pub struct DispatchInput {
    /// Notification category, selects the title
    pub severity: Severity,
    /// Notification body
    pub message: String,
    /// Icon file, already resolved; `None` for the backend default
    pub icon: Option<PathBuf>,
}

/// Everything decided before a backend is contacted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNotification {
    /// Raw OS identifier this call runs on
    pub os: String,
    /// Backend platform, `None` when the OS has no backend
    pub platform: Option<Platform>,
    pub title: String,
    pub message: String,
    pub icon: Option<PathBuf>,
}

impl ResolvedNotification {
    /// Platform name for display, falling back to the raw OS identifier
    pub fn platform_label(&self) -> &str {
        match &self.platform {
            Some(platform) => platform.name(),
            None => &self.os,
        }
    }
}

/// Result of a dispatch: success flag plus a status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub success: bool,
    pub status: &'static str,
    /// Known false failure that was downgraded to success
    pub warning: Option<String>,
    /// Cause of a failed dispatch
    pub error: Option<NotificationError>,
}

impl DispatchOutcome {
    fn displayed(delivery: Delivery) -> Self {
        Self {
            success: true,
            status: "Notification displayed",
            warning: match delivery {
                Delivery::Shown => None,
                Delivery::ShownDespiteError(note) => Some(note),
            },
            error: None,
        }
    }

    fn failed(error: NotificationError) -> Self {
        Self {
            success: false,
            status: "Notification could not be displayed",
            warning: None,
            error: Some(error),
        }
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.success {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}

/// Resolves the title and platform for a notification and hands it to the
/// matching backend.
pub struct DispatchNotificationUseCase<F>
where
    F: NotifierFactory,
{
    factory: F,
    os: String,
}

impl<F> DispatchNotificationUseCase<F>
where
    F: NotifierFactory,
{
    /// Create a use case for the host operating system
    pub fn new(factory: F) -> Self {
        Self::with_os(factory, env::consts::OS)
    }

    /// Create a use case for an explicit OS identifier
    pub fn with_os(factory: F, os: impl Into<String>) -> Self {
        Self {
            factory,
            os: os.into(),
        }
    }

    /// Resolve title and platform without contacting a backend
    pub fn resolve(&self, input: DispatchInput) -> ResolvedNotification {
        ResolvedNotification {
            platform: Platform::from_os(&self.os),
            os: self.os.clone(),
            title: input.severity.title().to_string(),
            message: input.message,
            icon: input.icon,
        }
    }

    /// Display a resolved notification on its platform's backend
    pub async fn dispatch(&self, resolved: &ResolvedNotification) -> DispatchOutcome {
        let Some(platform) = resolved.platform else {
            return DispatchOutcome::failed(NotificationError::UnsupportedPlatform(
                resolved.os.clone(),
            ));
        };

        let notifier = self.factory.create(platform);
        match notifier
            .display(&resolved.title, &resolved.message, resolved.icon.as_deref())
            .await
        {
            Ok(delivery) => DispatchOutcome::displayed(delivery),
            Err(e) => DispatchOutcome::failed(e),
        }
    }

    /// Resolve and dispatch in one step
    pub async fn execute(&self, input: DispatchInput) -> DispatchOutcome {
        let resolved = self.resolve(input);
        self.dispatch(&resolved).await
    }
}
