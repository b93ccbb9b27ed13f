//! Main app runner

use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{
    DispatchInput, DispatchNotificationUseCase, DispatchOutcome, EXIT_FAILURE, EXIT_SUCCESS,
};
use crate::domain::config::AppConfig;
use crate::domain::{HookEvent, Severity};
use crate::infrastructure::{IconLocator, NativeNotifierFactory, XdgConfigStore};

use super::args::{usage_text, Cli};
use super::hook_input::read_hook_event;
use super::presenter::Presenter;

/// Run one invocation: hook mode if stdin carries an event, legacy mode otherwise
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();

    let cli_config = AppConfig {
        icon: cli.icon.clone(),
        ..Default::default()
    };
    let config = load_merged_config(cli_config, &presenter).await;

    if let Some(event) = read_hook_event().await {
        return run_hook(&event, &config, cli.dry_run, &presenter).await;
    }

    let Some((notification_type, message)) = cli.legacy_pair() else {
        presenter.output(&usage_text());
        return ExitCode::from(EXIT_FAILURE);
    };

    let outcome = show_notification(
        Severity::from(notification_type),
        message,
        &config,
        cli.dry_run,
        &presenter,
    )
    .await;

    ExitCode::from(outcome.map_or(EXIT_SUCCESS, |o| o.exit_code()))
}

/// Hook mode: classify the event, then notify
async fn run_hook(
    event: &HookEvent,
    config: &AppConfig,
    dry_run: bool,
    presenter: &Presenter,
) -> ExitCode {
    let intent = event.classify();
    presenter.info(&format!("Event: {}", intent.title));

    let Some(outcome) =
        show_notification(intent.severity, &intent.message, config, dry_run, presenter).await
    else {
        return ExitCode::from(EXIT_SUCCESS);
    };

    if outcome.success {
        presenter.output("Notification sent successfully");
    } else {
        presenter.output("Notification failed");
    }
    ExitCode::from(outcome.exit_code())
}

/// Resolve and display one notification.
///
/// Returns `None` for a dry run, which stops before contacting a backend.
pub async fn show_notification(
    severity: Severity,
    message: &str,
    config: &AppConfig,
    dry_run: bool,
    presenter: &Presenter,
) -> Option<DispatchOutcome> {
    let icon = IconLocator::new().resolve(config.icon.as_deref());
    let use_case = DispatchNotificationUseCase::new(NativeNotifierFactory::new(config));

    let resolved = use_case.resolve(DispatchInput {
        severity,
        message: message.to_string(),
        icon,
    });
    presenter.resolved(&resolved);

    if dry_run {
        presenter.info("Dry run, notification not sent");
        return None;
    }

    let outcome = use_case.dispatch(&resolved).await;
    presenter.outcome(&outcome);
    Some(outcome)
}

/// Load and merge configuration from file and CLI (which includes env)
pub async fn load_merged_config(cli_config: AppConfig, presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("{} ({}), using defaults", e, store.path().display()));
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < env/cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
