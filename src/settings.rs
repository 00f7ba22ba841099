//! Display settings and preferences
//!
//! Read from an optional JSON file at startup; nothing is written back.

use std::path::Path;

use glam::Vec2;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::error::ConfigError;

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Frame rate the loop is paced to
    pub target_fps: u32,

    // === HUD ===
    /// Show the mm:ss run timer
    pub show_timer: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            target_fps: TARGET_FPS,

            show_timer: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Screen dimensions as a vector
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Load settings from a JSON file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings: Self = read_json_or_default(path)?;
        if settings.screen_width == 0 || settings.screen_height == 0 {
            return Err(ConfigError::Invalid {
                field: "screen_width",
                reason: "screen dimensions must be non-zero",
            });
        }
        if settings.target_fps == 0 {
            return Err(ConfigError::Invalid {
                field: "target_fps",
                reason: "must be at least 1",
            });
        }
        log::info!(
            "Settings: {}x{} @ {} fps",
            settings.screen_width,
            settings.screen_height,
            settings.target_fps
        );
        Ok(settings)
    }
}

/// Read a JSON config file, falling back to `T::default()` when it is absent
pub(crate) fn read_json_or_default<T>(path: &Path) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match std::fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("{} not found, using defaults", path.display());
            Ok(T::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
