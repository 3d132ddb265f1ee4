//! TOML configuration for the demo binary.
//!
//! ```toml
//! [demo]
//! is_dark = false
//! size = "medium"
//! animation_duration = 0.3
//!
//! [viewport]
//! width = 1280
//! height = 720
//! ```

use crate::error::ConfigError;
use crate::state::{DemoState, MAX_DURATION, MIN_DURATION};
use lampkit_core::Rect;
use lampkit_widgets::{LampSize, DEFAULT_ANIMATION_DURATION};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial page state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSection {
    /// Start in the dark theme
    pub is_dark: bool,
    /// Size of the main lamp
    pub size: LampSize,
    /// Base transition duration in seconds
    pub animation_duration: f64,
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            is_dark: false,
            size: LampSize::Medium,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

/// Viewport the page is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportSection {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl ViewportSection {
    /// Viewport rectangle at the origin.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// `[demo]`
    pub demo: DemoSection,
    /// `[viewport]`
    pub viewport: ViewportSection,
}

impl DemoConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading demo config");
        Self::from_toml_str(&input)
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_duration("demo.animation_duration", self.demo.animation_duration)?;
        for (field, value) in [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("{value} is not a positive size")));
            }
        }
        Ok(())
    }

    /// Page state to mount with.
    #[must_use]
    pub fn initial_state(&self) -> DemoState {
        DemoState {
            is_dark: self.demo.is_dark,
            selected_size: self.demo.size,
            animation_duration: self.demo.animation_duration,
        }
    }
}

/// Reject durations outside the speed slider's range.
pub(crate) fn validate_duration(field: &str, seconds: f64) -> Result<(), ConfigError> {
    if (MIN_DURATION..=MAX_DURATION).contains(&seconds) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("{seconds} is outside {MIN_DURATION}..={MAX_DURATION} seconds"),
        ))
    }
}
