//! Demo page state.

use lampkit_core::{State, Update};
use lampkit_widgets::{LampSize, DEFAULT_ANIMATION_DURATION};
use serde::{Deserialize, Serialize};

/// Slowest selectable transition in seconds.
pub const MIN_DURATION: f64 = 0.1;
/// Fastest selectable transition in seconds.
pub const MAX_DURATION: f64 = 1.0;
/// Slider step in seconds.
pub const DURATION_STEP: f64 = 0.1;

/// Everything the demo page renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoState {
    /// Current theme
    pub is_dark: bool,
    /// Size of the main lamp
    pub selected_size: LampSize,
    /// Base transition duration shared by every lamp
    pub animation_duration: f64,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            is_dark: false,
            selected_size: LampSize::Medium,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl DemoState {
    /// "Light" or "Dark".
    #[must_use]
    pub const fn theme_label(&self) -> &'static str {
        if self.is_dark {
            "Dark"
        } else {
            "Light"
        }
    }
}

/// Messages the demo page reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoMessage {
    /// Flip the theme
    ToggleTheme,
    /// Pick the main lamp's size
    SelectSize(LampSize),
    /// Change the shared transition duration
    SetAnimationDuration(f64),
}

impl State for DemoState {
    type Message = DemoMessage;

    fn update(&mut self, msg: Self::Message) -> Update {
        match msg {
            DemoMessage::ToggleTheme => {
                self.is_dark = !self.is_dark;
                tracing::debug!(is_dark = self.is_dark, "theme toggled");
                Update::Changed
            }
            DemoMessage::SelectSize(size) => {
                let changed = size != self.selected_size;
                self.selected_size = size;
                Update::from_changed(changed)
            }
            DemoMessage::SetAnimationDuration(seconds) => {
                if !seconds.is_finite() {
                    tracing::warn!(seconds, "ignoring non-finite animation duration");
                    return Update::Unchanged;
                }
                let seconds = seconds.clamp(MIN_DURATION, MAX_DURATION);
                let changed = (seconds - self.animation_duration).abs() > f64::EPSILON;
                self.animation_duration = seconds;
                Update::from_changed(changed)
            }
        }
    }
}
