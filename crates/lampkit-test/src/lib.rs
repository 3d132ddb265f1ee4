#![allow(clippy::missing_panics_doc)]
#![allow(clippy::redundant_closure_for_method_calls)]

//! Testing harness for Lampkit widgets.
//!
//! Drive a widget with simulated pointer gestures and simulated time, then
//! query it with CSS-like selectors:
//!
//! ```ignore
//! use lampkit_test::Harness;
//!
//! let mut harness = Harness::new(host);
//! harness.click("#main-lamp").advance(0.5);
//! harness.assert_text("#theme-badge", "Current Theme: Dark");
//! ```

mod harness;
mod selector;

pub use harness::{Harness, FRAME};
pub use selector::{Selector, SelectorError, SelectorParser};
