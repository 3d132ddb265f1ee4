//! Widgets for Lampkit: the hanging-lamp theme toggle and the small set of
//! controls its demo page needs.

pub mod button;
pub mod lamp;
pub mod slider;
pub mod text;

pub use button::{Button, ButtonClicked};
pub use lamp::{
    Gesture, LampConfig, LampDimensions, LampPlacement, LampProperty, LampSize,
    LampSizeParseError, LampToggle, LampToggled, LampVisual, ToggleCallback,
    DEFAULT_ANIMATION_DURATION,
};
pub use slider::{Slider, SliderChanged};
pub use text::Text;
