//! Draw settings, stored as JSON.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::core::style::Style;

/// Environment variable naming a settings file.
pub const SETTINGS_ENV: &str = "TESSERA_SETTINGS";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Colors the screen is cleared with before each pass. Widgets inherit
    /// them unless a `Tint` says otherwise.
    pub clear: Style,
}

pub fn settings_path_from_env() -> Option<PathBuf> {
    std::env::var_os(SETTINGS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn load_settings(path: &Path) -> io::Result<DrawSettings> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn save_settings(path: &Path, settings: &DrawSettings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
