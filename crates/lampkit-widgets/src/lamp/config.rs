//! Lamp props: size, placement and the per-render configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Duration used when a caller passes a non-positive or non-finite one.
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.3;

/// Width of the hanging cable in pixels.
pub const CABLE_WIDTH: f32 = 4.0;

/// Callback invoked once per completed click or tap.
pub type ToggleCallback = Arc<dyn Fn() + Send + Sync>;

/// Pixel dimensions of a lamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LampDimensions {
    /// Width of the lamp shade
    pub body_width: f32,
    /// Height of the lamp shade
    pub body_height: f32,
    /// Length of the cable above the shade
    pub cable_length: f32,
    /// Thickness of the cable
    pub cable_width: f32,
}

impl LampDimensions {
    /// Cable plus shade.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.cable_length + self.body_height
    }
}

/// The three supported lamp sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LampSize {
    /// 128 x 24, 20 px cable
    Small,
    /// 224 x 40, 30 px cable
    #[default]
    Medium,
    /// 320 x 56, 40 px cable
    Large,
}

impl LampSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Dimensions for this size.
    #[must_use]
    pub const fn dimensions(self) -> LampDimensions {
        let (body_width, body_height, cable_length) = match self {
            Self::Small => (128.0, 24.0, 20.0),
            Self::Medium => (224.0, 40.0, 30.0),
            Self::Large => (320.0, 56.0, 40.0),
        };
        LampDimensions {
            body_width,
            body_height,
            cable_length,
            cable_width: CABLE_WIDTH,
        }
    }

    /// Lowercase identifier (`"small"`, `"medium"`, `"large"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Capitalized label for buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Parse, falling back to [`LampSize::Medium`] on unknown input.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse::<Self>().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to medium lamp");
            Self::Medium
        })
    }
}

impl fmt::Display for LampSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LampSize {
    type Err = LampSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(LampSizeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown lamp size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lamp size {0:?} (expected small, medium or large)")]
pub struct LampSizeParseError(pub String);

/// Where the lamp sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LampPlacement {
    /// Pinned horizontally centered, 16 px below the top of the viewport
    #[default]
    FixedTopCenter,
    /// Flows inside its parent
    Inline,
}

impl LampPlacement {
    /// Offset from the top of the allocated bounds.
    #[must_use]
    pub const fn top_offset(self) -> f32 {
        match self {
            Self::FixedTopCenter => 16.0,
            Self::Inline => 0.0,
        }
    }

    /// CSS class carried by the outer element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::FixedTopCenter => "lamp-toggle--fixed",
            Self::Inline => "lamp-toggle--inline",
        }
    }
}

/// Props for one render of a [`LampToggle`](super::LampToggle).
///
/// Built by the parent on every render. `is_dark == false` means the lamp
/// is lit.
#[derive(Clone)]
pub struct LampConfig {
    /// Current theme; the lamp is on when this is false
    pub is_dark: bool,
    /// Invoked once per completed click or tap
    pub on_toggle: Option<ToggleCallback>,
    /// Size variant
    pub size: LampSize,
    /// Base transition duration in seconds
    pub animation_duration: f64,
    /// Extra CSS classes appended to the outer element
    pub extra_classes: String,
    /// Page placement
    pub placement: LampPlacement,
    /// Test ID
    pub test_id: Option<String>,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            is_dark: false,
            on_toggle: None,
            size: LampSize::Medium,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            extra_classes: String::new(),
            placement: LampPlacement::FixedTopCenter,
            test_id: None,
        }
    }
}

impl LampConfig {
    /// Config for the given theme with every other prop defaulted.
    #[must_use]
    pub fn new(is_dark: bool) -> Self {
        Self {
            is_dark,
            ..Self::default()
        }
    }

    /// Set the toggle callback.
    #[must_use]
    pub fn on_toggle<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_toggle = Some(Arc::new(callback));
        self
    }

    /// Share an existing toggle callback.
    #[must_use]
    pub fn on_toggle_shared(mut self, callback: ToggleCallback) -> Self {
        self.on_toggle = Some(callback);
        self
    }

    /// Set the size.
    #[must_use]
    pub const fn size(mut self, size: LampSize) -> Self {
        self.size = size;
        self
    }

    /// Set the base transition duration.
    #[must_use]
    pub const fn animation_duration(mut self, seconds: f64) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Set extra CSS classes.
    #[must_use]
    pub fn extra_classes(mut self, classes: impl Into<String>) -> Self {
        self.extra_classes = classes.into();
        self
    }

    /// Set the placement.
    #[must_use]
    pub const fn placement(mut self, placement: LampPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Whether the lamp is lit.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        !self.is_dark
    }

    /// Dimensions of the configured size.
    #[must_use]
    pub const fn dimensions(&self) -> LampDimensions {
        self.size.dimensions()
    }

    /// Replace an unusable duration with the default.
    #[must_use]
    pub(crate) fn sanitized(mut self) -> Self {
        if !(self.animation_duration.is_finite() && self.animation_duration > 0.0) {
            tracing::warn!(
                duration = self.animation_duration,
                fallback = DEFAULT_ANIMATION_DURATION,
                "invalid lamp animation duration"
            );
            self.animation_duration = DEFAULT_ANIMATION_DURATION;
        }
        self
    }
}

impl fmt::Debug for LampConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LampConfig")
            .field("is_dark", &self.is_dark)
            .field("on_toggle", &self.on_toggle.as_ref().map(|_| "Fn()"))
            .field("size", &self.size)
            .field("animation_duration", &self.animation_duration)
            .field("extra_classes", &self.extra_classes)
            .field("placement", &self.placement)
            .field("test_id", &self.test_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_size_table() {
        let small = LampSize::Small.dimensions();
        assert_eq!((small.body_width, small.body_height, small.cable_length), (128.0, 24.0, 20.0));
        let medium = LampSize::Medium.dimensions();
        assert_eq!((medium.body_width, medium.body_height, medium.cable_length), (224.0, 40.0, 30.0));
        let large = LampSize::Large.dimensions();
        assert_eq!((large.body_width, large.body_height, large.cable_length), (320.0, 56.0, 40.0));
        for size in LampSize::ALL {
            assert_eq!(size.dimensions().cable_width, 4.0);
        }
    }

    #[test]
    fn test_total_height() {
        assert_eq!(LampSize::Medium.dimensions().total_height(), 70.0);
    }

    #[test]
    fn test_size_parse() {
        assert_eq!("small".parse::<LampSize>(), Ok(LampSize::Small));
        assert_eq!(" Large ".parse::<LampSize>(), Ok(LampSize::Large));
        let err = "huge".parse::<LampSize>().unwrap_err();
        assert_eq!(err, LampSizeParseError("huge".to_string()));
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_size_parse_lenient_falls_back() {
        assert_eq!(LampSize::parse_lenient("huge"), LampSize::Medium);
        assert_eq!(LampSize::parse_lenient("small"), LampSize::Small);
    }

    #[test]
    fn test_size_display_roundtrip() {
        for size in LampSize::ALL {
            assert_eq!(size.to_string().parse::<LampSize>(), Ok(size));
        }
    }

    #[test]
    fn test_size_serde_lowercase() {
        assert_eq!(serde_json::to_string(&LampSize::Large).unwrap(), "\"large\"");
        let placement: LampPlacement = serde_json::from_str("\"fixed-top-center\"").unwrap();
        assert_eq!(placement, LampPlacement::FixedTopCenter);
    }

    #[test]
    fn test_config_defaults() {
        let config = LampConfig::new(true);
        assert!(config.is_dark);
        assert!(!config.is_on());
        assert!(config.on_toggle.is_none());
        assert_eq!(config.size, LampSize::Medium);
        assert_eq!(config.animation_duration, 0.3);
        assert!(config.extra_classes.is_empty());
        assert_eq!(config.placement, LampPlacement::FixedTopCenter);
    }

    #[test]
    fn test_config_builder() {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = hits.clone();
        let config = LampConfig::new(false)
            .size(LampSize::Small)
            .animation_duration(0.8)
            .extra_classes("relative")
            .placement(LampPlacement::Inline)
            .test_id("lamp")
            .on_toggle(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            });

        assert_eq!(config.dimensions().body_width, 128.0);
        assert_eq!(config.test_id.as_deref(), Some("lamp"));
        if let Some(cb) = &config.on_toggle {
            cb();
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(format!("{config:?}").contains("Fn()"));
    }

    #[test]
    fn test_sanitized_duration() {
        assert_eq!(LampConfig::new(false).animation_duration(0.0).sanitized().animation_duration, 0.3);
        assert_eq!(LampConfig::new(false).animation_duration(-1.0).sanitized().animation_duration, 0.3);
        assert_eq!(
            LampConfig::new(false).animation_duration(f64::INFINITY).sanitized().animation_duration,
            0.3
        );
        assert_eq!(LampConfig::new(false).animation_duration(5.0).sanitized().animation_duration, 5.0);
    }

    #[test]
    fn test_placement_offsets() {
        assert_eq!(LampPlacement::FixedTopCenter.top_offset(), 16.0);
        assert_eq!(LampPlacement::Inline.top_offset(), 0.0);
    }
}
