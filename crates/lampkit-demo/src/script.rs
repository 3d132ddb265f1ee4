//! Scripted demo sessions.
//!
//! A script is a TOML list of steps played against a [`DemoHost`] with
//! simulated pointer input and simulated time:
//!
//! ```toml
//! [[step]]
//! action = "click-lamp"
//!
//! [[step]]
//! action = "advance"
//! seconds = 0.5
//!
//! [[step]]
//! action = "select-size"
//! size = "large"
//! ```

use crate::config::validate_duration;
use crate::error::{ConfigError, DemoError};
use crate::host::{
    comparison_lamp_id, size_button_id, DemoHost, FrameSummary, MAIN_LAMP_ID, SPEED_SLIDER_ID,
    TOGGLE_BUTTON_ID,
};
use lampkit_core::{Event, MouseButton, Point, Widget};
use lampkit_widgets::LampSize;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Length of one simulated frame in seconds.
pub const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Longest time a single `advance` step may cover.
pub const MAX_ADVANCE_SECONDS: f64 = 60.0;

/// Radius of the speed slider's thumb; the track is inset by it.
const SLIDER_INSET: f32 = 8.0;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Click a lamp: the main lamp, or the comparison lamp of `size`
    ClickLamp {
        /// Comparison lamp to click
        #[serde(default)]
        size: Option<LampSize>,
    },
    /// Click the footer "Toggle Theme" button
    ClickToggleButton,
    /// Click a size button
    SelectSize {
        /// Size to select
        size: LampSize,
    },
    /// Drag the speed slider to `value` seconds
    SetSpeed {
        /// Target duration
        value: f64,
    },
    /// Let time pass
    Advance {
        /// Seconds to advance
        seconds: f64,
    },
}

impl Step {
    /// Action name as written in scripts.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::ClickLamp { .. } => "click-lamp",
            Self::ClickToggleButton => "click-toggle-button",
            Self::SelectSize { .. } => "select-size",
            Self::SetSpeed { .. } => "set-speed",
            Self::Advance { .. } => "advance",
        }
    }
}

/// A parsed script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoScript {
    /// Steps in order
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl DemoScript {
    /// Parse and validate a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let script: Self = toml::from_str(input)?;
        script.validate()?;
        Ok(script)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Check every step's values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                Step::SetSpeed { value } => {
                    validate_duration(&format!("step[{index}].value"), *value)?;
                }
                Step::Advance { seconds } if !(0.0..=MAX_ADVANCE_SECONDS).contains(seconds) => {
                    return Err(ConfigError::invalid(
                        format!("step[{index}].seconds"),
                        format!("{seconds} is outside 0..={MAX_ADVANCE_SECONDS} seconds"),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Outcome of one played step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Position in the script, starting at 1
    pub index: usize,
    /// Action name
    pub action: &'static str,
    /// Simulated seconds since the session started
    pub elapsed: f64,
    /// Page after the step
    pub frame: FrameSummary,
}

/// Plays scripts against a host.
#[derive(Debug)]
pub struct Session {
    host: DemoHost,
    elapsed: f64,
}

impl Session {
    /// Start a session on a laid-out host.
    #[must_use]
    pub const fn new(host: DemoHost) -> Self {
        Self { host, elapsed: 0.0 }
    }

    /// The host being driven.
    #[must_use]
    pub const fn host(&self) -> &DemoHost {
        &self.host
    }

    /// Give the host back.
    #[must_use]
    pub fn into_host(self) -> DemoHost {
        self.host
    }

    /// Simulated seconds played so far.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Play every step, reporting the page after each one.
    pub fn run(&mut self, script: &DemoScript) -> Result<Vec<StepReport>, DemoError> {
        script.validate()?;
        script
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                self.play(step)?;
                Ok(StepReport {
                    index: i + 1,
                    action: step.action(),
                    elapsed: self.elapsed,
                    frame: self.host.summary(),
                })
            })
            .collect()
    }

    /// Play one step.
    pub fn play(&mut self, step: &Step) -> Result<(), DemoError> {
        tracing::debug!(action = step.action(), "playing step");
        match step {
            Step::ClickLamp { size: None } => self.click(MAIN_LAMP_ID),
            Step::ClickLamp { size: Some(size) } => self.click(&comparison_lamp_id(*size)),
            Step::ClickToggleButton => self.click(TOGGLE_BUTTON_ID),
            Step::SelectSize { size } => self.click(&size_button_id(*size)),
            Step::SetSpeed { value } => self.drag_slider(*value),
            Step::Advance { seconds } => {
                self.advance(*seconds);
                Ok(())
            }
        }
    }

    /// Advance simulated time in frame-sized steps. `seconds` is clamped to
    /// `0..=MAX_ADVANCE_SECONDS`.
    pub fn advance(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() {
            seconds.clamp(0.0, MAX_ADVANCE_SECONDS)
        } else {
            0.0
        };
        let frames = (seconds / FRAME_SECONDS).floor();
        let rest = frames.mul_add(-FRAME_SECONDS, seconds);
        for _ in 0..frames as u64 {
            self.step_time(FRAME_SECONDS);
        }
        if rest > 1e-12 {
            self.step_time(rest);
        }
    }

    fn step_time(&mut self, dt: f64) {
        self.host.tick(dt);
        self.elapsed += dt;
    }

    fn center_of(&self, test_id: &str) -> Result<Point, DemoError> {
        self.host
            .find(test_id)
            .map(|w| w.bounds().center())
            .ok_or_else(|| DemoError::MissingWidget(test_id.to_string()))
    }

    fn click(&mut self, test_id: &str) -> Result<(), DemoError> {
        let position = self.center_of(test_id)?;
        self.host.event(&Event::MouseMove { position });
        self.host.event(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.host.event(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        Ok(())
    }

    fn drag_slider(&mut self, value: f64) -> Result<(), DemoError> {
        let bounds = self
            .host
            .find(SPEED_SLIDER_ID)
            .map(Widget::bounds)
            .ok_or_else(|| DemoError::MissingWidget(SPEED_SLIDER_ID.to_string()))?;
        let slider = self.host.speed_slider();
        let span = slider.get_max() - slider.get_min();
        let fraction = if span > 0.0 {
            ((value - slider.get_min()) / span) as f32
        } else {
            0.0
        };
        let track_width = 2.0f32.mul_add(-SLIDER_INSET, bounds.width);
        let position = Point::new(
            track_width.mul_add(fraction, bounds.x + SLIDER_INSET),
            bounds.center().y,
        );
        self.host.event(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.host.event(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        Ok(())
    }
}
