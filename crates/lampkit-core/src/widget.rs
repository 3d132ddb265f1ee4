//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by their host:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self within the allocated bounds
//! 3. **Paint**: emit draw operations onto a [`Canvas`]
//!
//! Between frames the host feeds input through [`Widget::event`] and advances
//! animations through [`Widget::tick`].
//!
//! # Examples
//!
//! ```
//! use lampkit_core::TypeId;
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::constraints::Constraints;
use crate::draw::{Fill, Shadow, Transform2D};
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Message a widget hands back to its host from [`Widget::event`].
pub type WidgetMessage = Box<dyn Any + Send>;

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw operations.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally producing a message for the host.
    fn event(&mut self, event: &Event) -> Option<WidgetMessage>;

    /// Advance running animations by `dt` seconds.
    fn tick(&mut self, _dt: f64) {}

    /// Whether any animation is still running.
    fn is_animating(&self) -> bool {
        false
    }

    /// Stop everything the widget runs on its own. Called before removal.
    fn unmount(&mut self) {}

    /// Whether this widget reacts to pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds assigned by the last layout pass.
    fn bounds(&self) -> Rect {
        Rect::default()
    }

    /// Call `visitor` with each direct child.
    fn visit_children<'a>(&'a self, _visitor: &mut dyn FnMut(&'a dyn Widget)) {}
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Fill);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], fill: Fill);

    /// Cast a shadow from a closed polygon outline.
    fn cast_shadow(&mut self, points: &[Point], shadow: Shadow);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a transform applied to subsequent operations.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the last transform.
    fn pop_transform(&mut self);

    /// Push an opacity layer multiplied into subsequent colors.
    fn push_opacity(&mut self, opacity: f32);

    /// Pop the last opacity layer.
    fn pop_opacity(&mut self);
}

/// Text style for rendering.
///
/// # Examples
///
/// ```
/// use lampkit_core::{TextStyle, FontWeight};
///
/// let default_style = TextStyle::default();
/// assert_eq!(default_style.size, 16.0);
/// assert_eq!(default_style.weight, FontWeight::Normal);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    Normal,
    /// Medium (500)
    Medium,
    /// Semibold (600)
    Semibold,
    /// Bold (700)
    Bold,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Two-state switch
    Switch,
    /// Slider
    Slider,
    /// Static text
    Text,
}

impl AccessibleRole {
    /// ARIA role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Button => "button",
            Self::Switch => "switch",
            Self::Slider => "slider",
            Self::Text => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_distinguishes_types() {
        assert_eq!(TypeId::of::<String>(), TypeId::of::<String>());
        assert_ne!(TypeId::of::<String>(), TypeId::of::<u8>());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }
}
