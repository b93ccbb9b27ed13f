//! Notification icon lookup
//!
//! Icons live in an `icon/` directory next to the installed binary.

use std::env;
use std::path::{Path, PathBuf};

/// Directory holding the icon files, relative to the install location
pub const ICON_DIR: &str = "icon";

/// Icon files in order of preference
pub const ICON_FILES: &[&str] = &["claude-ai-icon.ico", "claude-ai-icon.png"];

/// Finds the icon shown with each notification
#[derive(Debug, Clone)]
pub struct IconLocator {
    install_dir: Option<PathBuf>,
}

impl IconLocator {
    /// Locate icons next to the running executable
    pub fn new() -> Self {
        let install_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self { install_dir }
    }

    /// Locate icons under a custom install directory
    pub fn with_install_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: Some(dir.into()),
        }
    }

    /// Resolve the icon path.
    ///
    /// An existing `preferred` file wins; otherwise the first existing file of
    /// [`ICON_FILES`] under the install directory. `None` if nothing exists.
    pub fn resolve(&self, preferred: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = preferred.filter(|p| p.is_file()) {
            return Some(path.to_path_buf());
        }

        let icon_dir = self.install_dir.as_ref()?.join(ICON_DIR);
        ICON_FILES
            .iter()
            .map(|name| icon_dir.join(name))
            .find(|path| path.is_file())
    }
}

impl Default for IconLocator {
    fn default() -> Self {
        Self::new()
    }
}
