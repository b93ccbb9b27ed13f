//! Hook event record and its classification into a notification intent

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::severity::{Severity, APP_NAME};
use super::text::{truncate, truncate_with_ellipsis};

const MAX_COMMAND_CHARS: usize = 50;
const MAX_TASK_CHARS: usize = 60;
const MAX_ERROR_CHARS: usize = 80;
const MAX_NOTIFICATION_CHARS: usize = 100;

/// Structured description of an upstream tool or session event.
///
/// Every field is optional; unknown fields are ignored. A text field holding
/// a non-string value reads as absent, and `tool_input`/`tool_response` keep
/// whatever JSON the tool produced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookEvent {
    #[serde(deserialize_with = "lenient_string")]
    pub hook_event_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub tool_name: Option<String>,
    pub tool_input: Option<Value>,
    pub tool_response: Option<Value>,
    #[serde(deserialize_with = "lenient_string")]
    pub error: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub notification_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub reason: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub agent_type: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// The `(severity, title, message)` triple derived from an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationIntent {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl NotificationIntent {
    /// Create a new intent
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }
}

impl HookEvent {
    /// Parse a hook event from raw stdin text.
    ///
    /// Returns `None` for anything that is not a non-empty JSON object.
    pub fn from_json(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        match serde_json::from_str::<Value>(raw).ok()? {
            Value::Object(map) if !map.is_empty() => {
                serde_json::from_value(Value::Object(map)).ok()
            }
            _ => None,
        }
    }

    /// Derive the notification for this event. First matching rule wins.
    pub fn classify(&self) -> NotificationIntent {
        let event_name = self.hook_event_name.as_deref().unwrap_or_default();
        let tool = self.tool_name.as_deref().unwrap_or_default();

        match event_name {
            "SessionStart" => {
                let source = self.source.as_deref().unwrap_or("startup");
                NotificationIntent::info("Session Started", format!("Session {source}"))
            }
            "Stop" => NotificationIntent::info("Task Complete", "Claude has finished responding"),
            "PreToolUse" => self.classify_pre_tool_use(tool),
            "PostToolUse" => self.classify_post_tool_use(tool),
            "PostToolUseFailure" => {
                let message = match self.error.as_deref() {
                    Some(error) if !error.is_empty() => truncate(error, MAX_ERROR_CHARS),
                    _ => "Unknown error".to_string(),
                };
                NotificationIntent::new(Severity::Error, format!("{tool} Failed"), message)
            }
            "Notification" => {
                let severity = self
                    .notification_type
                    .as_deref()
                    .map(Severity::from)
                    .unwrap_or_default();
                let message = self.message.as_deref().unwrap_or("Notification");
                NotificationIntent::new(
                    severity,
                    APP_NAME,
                    truncate(message, MAX_NOTIFICATION_CHARS),
                )
            }
            "SubagentStart" => {
                NotificationIntent::info("Agent Started", format!("{} spawned", self.agent_type()))
            }
            "SubagentStop" => {
                NotificationIntent::info("Agent Stopped", format!("{} finished", self.agent_type()))
            }
            "SessionEnd" => {
                let reason = self.reason.as_deref().unwrap_or("ended");
                NotificationIntent::info("Session Ended", format!("Reason: {reason}"))
            }
            "" => NotificationIntent::info(APP_NAME, "Hook triggered"),
            other => NotificationIntent::info(APP_NAME, other),
        }
    }

    fn classify_pre_tool_use(&self, tool: &str) -> NotificationIntent {
        match tool {
            "Write" | "Edit" => {
                let filename = self.file_name().unwrap_or("unknown");
                NotificationIntent::info(
                    format!("Writing: {filename}"),
                    format!("Modifying {filename}"),
                )
            }
            "Bash" => {
                let command = self.input_str("command").unwrap_or_default();
                NotificationIntent::info(
                    "Running Command",
                    truncate_with_ellipsis(command, MAX_COMMAND_CHARS),
                )
            }
            "Task" => {
                let description = self.input_str("description").unwrap_or("subtask");
                NotificationIntent::info("Spawning Task", truncate(description, MAX_TASK_CHARS))
            }
            _ => NotificationIntent::info(format!("Tool: {tool}"), format!("Using {tool}")),
        }
    }

    fn classify_post_tool_use(&self, tool: &str) -> NotificationIntent {
        match tool {
            "Write" | "Edit" => {
                let status = if self.response_succeeded() { "saved" } else { "failed" };
                NotificationIntent::info(
                    format!("File {status}"),
                    self.file_name().unwrap_or("file"),
                )
            }
            "Task" => NotificationIntent::info("Subtask Done", "A subtask has completed"),
            _ => NotificationIntent::info(format!("{tool} Done"), format!("{tool} completed")),
        }
    }

    fn agent_type(&self) -> &str {
        self.agent_type.as_deref().unwrap_or("Agent")
    }

    fn input_str(&self, key: &str) -> Option<&str> {
        self.tool_input.as_ref()?.as_object()?.get(key)?.as_str()
    }

    /// Final component of `tool_input.file_path`, if there is one.
    ///
    /// Paths without a final component (`/`, `dir/..`) count as missing.
    fn file_name(&self) -> Option<&str> {
        let path = self.input_str("file_path").filter(|p| !p.is_empty())?;
        Path::new(path).file_name()?.to_str()
    }

    /// `tool_response.success`, read with JSON truthiness; absent means success
    fn response_succeeded(&self) -> bool {
        self.tool_response
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|response| response.get("success"))
            .map_or(true, is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
