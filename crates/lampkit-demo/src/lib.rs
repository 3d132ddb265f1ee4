//! Demo page for the lamp theme toggle.
//!
//! [`DemoHost`] owns the theme and renders one fixed lamp, a row of
//! comparison lamps in every size, size buttons, a speed slider and a footer
//! toggle button. The `lamp-demo` binary renders it headlessly or plays TOML
//! scripts against it.

pub mod config;
pub mod error;
pub mod host;
pub mod page;
pub mod script;
pub mod state;

pub use config::{DemoConfig, DemoSection, ViewportSection};
pub use error::{ConfigError, DemoError};
pub use host::{DemoHost, FrameSummary, LampSummary, ThemeChanged};
pub use page::{PageStyle, PageSurface, RecordingSurface, PAGE_TRANSITION};
pub use script::{DemoScript, Session, Step, StepReport, FRAME_SECONDS, MAX_ADVANCE_SECONDS};
pub use state::{DemoMessage, DemoState};
