//! Static text label.

use lampkit_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Rect, Size, TypeId, Widget, WidgetMessage,
};
use serde::{Deserialize, Serialize};

/// Single-line text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    content: String,
    style: TextStyle,
    test_id_value: Option<String>,
    #[serde(skip)]
    bounds: Rect,
}

impl Text {
    /// Create text with the default style.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.style.size = size;
        self
    }

    /// Set font weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.style.weight = weight;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Recolor.
    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text style.
    #[must_use]
    pub const fn style(&self) -> &TextStyle {
        &self.style
    }
}

impl Widget for Text {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.content.chars().count() as f32 * self.style.size * 0.6;
        constraints.constrain(Size::new(width, self.style.size * 1.2))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.content, self.bounds.origin(), &self.style);
    }

    fn event(&mut self, _event: &Event) -> Option<WidgetMessage> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Text
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lampkit_core::{DrawCommand, Point, RecordingCanvas};

    #[test]
    fn test_text_measure() {
        let text = Text::new("Dark").font_size(10.0);
        let size = text.measure(Constraints::unbounded());
        assert!((size.width - 24.0).abs() < 0.001);
        assert!((size.height - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_text_paint() {
        let mut text = Text::new("Current Theme: Light").weight(FontWeight::Bold);
        text.layout(Rect::new(5.0, 6.0, 200.0, 20.0));
        let mut canvas = RecordingCanvas::new();
        text.paint(&mut canvas);
        match &canvas.commands()[0] {
            DrawCommand::Text {
                content,
                position,
                style,
            } => {
                assert_eq!(content, "Current Theme: Light");
                assert_eq!(*position, Point::new(5.0, 6.0));
                assert_eq!(style.weight, FontWeight::Bold);
            }
            other => panic!("Expected Text command, got {other:?}"),
        }
    }

    #[test]
    fn test_text_set_content() {
        let mut text = Text::new("a");
        text.set_content("b");
        assert_eq!(text.content(), "b");
        assert_eq!(text.accessible_name(), Some("b"));
        assert!(!text.is_interactive());
    }
}
