//! Hook event input from stdin

use std::io::IsTerminal;

use tokio::io::AsyncReadExt;

use crate::domain::HookEvent;

/// Read a hook event from stdin.
///
/// Returns `None` when stdin is a terminal, empty, unreadable or not a hook
/// event, so the caller can fall back to command-line arguments.
pub async fn read_hook_event() -> Option<HookEvent> {
    if std::io::stdin().is_terminal() {
        return None;
    }

    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await.ok()?;
    HookEvent::from_json(&raw)
}
