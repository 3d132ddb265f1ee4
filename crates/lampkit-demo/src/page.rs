//! Page-wide theme styling.
//!
//! The host does not own the document it lives in. It describes the page
//! look as a [`PageStyle`] and hands it to whatever [`PageSurface`] the
//! embedder supplies.

use lampkit_core::Color;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

/// Transition applied to the page when the theme changes.
pub const PAGE_TRANSITION: &str = "all 0.5s ease";

const DARK_BACKGROUND: Color = Color::from_rgba8(0x11, 0x18, 0x27, 0xff);
const LIGHT_BACKGROUND: Color = Color::WHITE;

/// Background, foreground and transition of the page body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStyle {
    /// Body background
    pub background: Color,
    /// Body text color
    pub foreground: Color,
    /// CSS transition shorthand
    pub transition: String,
}

impl PageStyle {
    /// Style for the given theme.
    #[must_use]
    pub fn for_theme(is_dark: bool) -> Self {
        let (background, foreground) = if is_dark {
            (DARK_BACKGROUND, LIGHT_BACKGROUND)
        } else {
            (LIGHT_BACKGROUND, DARK_BACKGROUND)
        };
        Self {
            background,
            foreground,
            transition: PAGE_TRANSITION.to_string(),
        }
    }

    /// Inline CSS declarations for the body element.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; color: {}; transition: {}",
            self.background.to_hex(),
            self.foreground.to_hex(),
            self.transition
        )
    }
}

/// Something that can take on a page style, e.g. a document body.
pub trait PageSurface: Send + Sync {
    /// Apply `style`, replacing the previous one.
    fn apply(&mut self, style: &PageStyle);
}

/// Surface that remembers every style applied to it.
///
/// Clones share the same history, so a caller can keep a handle while the
/// host owns the surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    applied: Arc<Mutex<Vec<PageStyle>>>,
}

impl RecordingSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn history(&self) -> MutexGuard<'_, Vec<PageStyle>> {
        self.applied
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Every applied style, oldest first.
    #[must_use]
    pub fn applied(&self) -> Vec<PageStyle> {
        self.history().clone()
    }

    /// Number of styles applied so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.history().len()
    }

    /// Style currently in effect.
    #[must_use]
    pub fn current(&self) -> Option<PageStyle> {
        self.history().last().cloned()
    }
}

impl PageSurface for RecordingSurface {
    fn apply(&mut self, style: &PageStyle) {
        tracing::debug!(css = %style.to_css(), "page style applied");
        self.history().push(style.clone());
    }
}
