//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::severity::APP_NAME;

/// Default display duration for Linux and Windows notifications
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// Default macOS sound cue
pub const DEFAULT_SOUND: &str = "default";

/// Windows-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowsConfig {
    /// Application User Model ID the toast is attributed to
    pub app_id: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub icon: Option<PathBuf>,
    pub app_name: Option<String>,
    pub timeout_ms: Option<u32>,
    pub sound: Option<String>,
    pub windows: Option<WindowsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            icon: None,
            app_name: Some(APP_NAME.to_string()),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            sound: Some(DEFAULT_SOUND.to_string()),
            windows: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            icon: other.icon.or(self.icon),
            app_name: other.app_name.or(self.app_name),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
            sound: other.sound.or(self.sound),
            windows: Self::merge_windows_config(self.windows, other.windows),
        }
    }

    fn merge_windows_config(
        base: Option<WindowsConfig>,
        other: Option<WindowsConfig>,
    ) -> Option<WindowsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(WindowsConfig {
                app_id: o.app_id.or(b.app_id),
            }),
        }
    }

    /// Get the application name, or "Claude Code" if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(APP_NAME)
    }

    /// Get the display duration, or 5000 ms if not set
    pub fn timeout_ms_or_default(&self) -> u32 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }

    /// Get the macOS sound name, or "default" if not set
    pub fn sound_or_default(&self) -> &str {
        self.sound.as_deref().unwrap_or(DEFAULT_SOUND)
    }

    /// Get the configured Windows toast app id, if any
    pub fn windows_app_id(&self) -> Option<&str> {
        self.windows.as_ref().and_then(|w| w.app_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.icon.is_none());
        assert_eq!(config.app_name, Some("Claude Code".to_string()));
        assert_eq!(config.timeout_ms, Some(5000));
        assert_eq!(config.sound, Some("default".to_string()));
        assert!(config.windows_app_id().is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.icon.is_none());
        assert!(config.app_name.is_none());
        assert!(config.timeout_ms.is_none());
        assert!(config.sound.is_none());
        assert!(config.windows.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            icon: Some(PathBuf::from("/base.png")),
            timeout_ms: Some(5000),
            sound: Some("default".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            icon: Some(PathBuf::from("/other.png")),
            timeout_ms: None, // Should not override
            sound: Some("Glass".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.icon, Some(PathBuf::from("/other.png")));
        assert_eq!(merged.timeout_ms, Some(5000)); // Kept from base
        assert_eq!(merged.sound, Some("Glass".to_string()));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.app_name_or_default(), "Claude Code");
        assert_eq!(config.timeout_ms_or_default(), 5000);
        assert_eq!(config.sound_or_default(), "default");
    }

    #[test]
    fn merge_windows_config() {
        let base = AppConfig {
            windows: Some(WindowsConfig {
                app_id: Some("Base.App".to_string()),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            windows: Some(WindowsConfig { app_id: None }),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.windows_app_id(), Some("Base.App"));
    }

    #[test]
    fn merge_windows_config_other_wins() {
        let base = AppConfig {
            windows: Some(WindowsConfig {
                app_id: Some("Base.App".to_string()),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            windows: Some(WindowsConfig {
                app_id: Some("Other.App".to_string()),
            }),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.windows_app_id(), Some("Other.App"));
    }
}
