//! Push button used by the demo controls.

use lampkit_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Fill, MouseButton, Point, Rect, Size, TypeId, Widget,
    WidgetMessage,
};
use serde::{Deserialize, Serialize};

/// Message emitted when a button is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonClicked {
    /// Test ID of the clicked button, if it has one
    pub test_id: Option<String>,
}

/// Button with a label, hover/press feedback and an optional selected look.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    label: String,
    /// Background color (normal state)
    background: Color,
    /// Background color (hover state)
    background_hover: Color,
    /// Background color when selected
    background_selected: Color,
    /// Text color
    text_color: Color,
    /// Text color when selected
    text_color_selected: Color,
    /// Corner radius
    corner_radius: f32,
    /// Padding
    padding: f32,
    /// Font size
    font_size: f32,
    /// Whether this button is the active choice of a group
    selected: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Current hover state
    #[serde(skip)]
    hovered: bool,
    /// Current pressed state
    #[serde(skip)]
    pressed: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Button {
    /// Create a new button with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background: Color::from_rgba8(0xe5, 0xe7, 0xeb, 0xff),
            background_hover: Color::from_rgba8(0xd1, 0xd5, 0xdb, 0xff),
            background_selected: Color::from_rgba8(0x3b, 0x82, 0xf6, 0xff),
            text_color: Color::from_rgba8(0x37, 0x41, 0x51, 0xff),
            text_color_selected: Color::WHITE,
            corner_radius: 8.0,
            padding: 12.0,
            font_size: 14.0,
            selected: false,
            test_id_value: None,
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set background colors for the normal and hover states.
    #[must_use]
    pub const fn background(mut self, normal: Color, hover: Color) -> Self {
        self.background = normal;
        self.background_hover = hover;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Recolor in place, keeping interaction state.
    pub fn set_palette(&mut self, normal: Color, hover: Color, text: Color) {
        self.background = normal;
        self.background_hover = hover;
        self.text_color = text;
    }

    /// Set the selected look.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Change the selected look in place.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the selected look is on.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the pointer is over the button.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Background for the current state.
    #[must_use]
    pub fn current_background(&self) -> Color {
        if self.selected {
            self.background_selected
        } else if self.hovered || self.pressed {
            self.background_hover
        } else {
            self.background
        }
    }

    fn estimate_text_size(&self) -> Size {
        let char_width = self.font_size * 0.6;
        Size::new(
            self.label.chars().count() as f32 * char_width,
            self.font_size * 1.2,
        )
    }
}

impl Widget for Button {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let text_size = self.estimate_text_size();
        constraints.constrain(Size::new(
            self.padding.mul_add(2.0, text_size.width),
            self.padding.mul_add(2.0, text_size.height),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rounded_rect(
            self.bounds,
            self.corner_radius,
            Fill::Solid(self.current_background()),
        );

        let text_size = self.estimate_text_size();
        let position = Point::new(
            self.bounds.x + (self.bounds.width - text_size.width) / 2.0,
            self.bounds.y + (self.bounds.height - text_size.height) / 2.0,
        );
        let style = TextStyle {
            size: self.font_size,
            color: if self.selected {
                self.text_color_selected
            } else {
                self.text_color
            },
            weight: FontWeight::Medium,
        };
        canvas.draw_text(&self.label, position, &style);
    }

    fn event(&mut self, event: &Event) -> Option<WidgetMessage> {
        match event {
            Event::MouseEnter => {
                self.hovered = true;
                None
            }
            Event::MouseLeave => {
                self.hovered = false;
                self.pressed = false;
                None
            }
            Event::MouseMove { position } => {
                self.hovered = self.bounds.contains_point(position);
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Event::TouchStart { position, .. } => {
                if self.bounds.contains_point(position) {
                    self.pressed = true;
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            }
            | Event::TouchEnd { position, .. } => {
                let was_pressed = self.pressed;
                self.pressed = false;

                if was_pressed && self.bounds.contains_point(position) {
                    Some(Box::new(ButtonClicked {
                        test_id: self.test_id_value.clone(),
                    }))
                } else {
                    None
                }
            }
            Event::TouchCancel { .. } => {
                self.pressed = false;
                None
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
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
    use lampkit_core::{DrawCommand, RecordingCanvas};

    fn laid_out(button: Button) -> Button {
        let mut button = button;
        button.layout(Rect::new(0.0, 0.0, 100.0, 40.0));
        button
    }

    fn click(button: &mut Button, position: Point) -> Option<WidgetMessage> {
        button.event(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        button.event(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    #[test]
    fn test_button_new() {
        let button = Button::new("Small");
        assert_eq!(button.label(), "Small");
        assert!(!button.is_selected());
        assert_eq!(button.accessible_role(), AccessibleRole::Button);
    }

    #[test]
    fn test_button_click_emits_message() {
        let mut button = laid_out(Button::new("Toggle Theme").with_test_id("toggle-theme"));
        let msg = click(&mut button, Point::new(50.0, 20.0)).expect("clicked");
        let clicked = msg.downcast_ref::<ButtonClicked>().expect("ButtonClicked");
        assert_eq!(clicked.test_id.as_deref(), Some("toggle-theme"));
    }

    #[test]
    fn test_button_release_outside_does_not_click() {
        let mut button = laid_out(Button::new("Large"));
        button.event(&Event::MouseDown {
            position: Point::new(50.0, 20.0),
            button: MouseButton::Left,
        });
        let msg = button.event(&Event::MouseUp {
            position: Point::new(500.0, 20.0),
            button: MouseButton::Left,
        });
        assert!(msg.is_none());
    }

    #[test]
    fn test_button_right_click_ignored() {
        let mut button = laid_out(Button::new("Large"));
        button.event(&Event::MouseDown {
            position: Point::new(50.0, 20.0),
            button: MouseButton::Right,
        });
        assert!(button
            .event(&Event::MouseUp {
                position: Point::new(50.0, 20.0),
                button: MouseButton::Right,
            })
            .is_none());
    }

    #[test]
    fn test_button_selected_background() {
        let button = Button::new("Medium").selected(true);
        assert_eq!(button.current_background().to_hex(), "#3b82f6");
        let mut hovered = Button::new("Medium");
        hovered.event(&Event::MouseEnter);
        assert!(hovered.is_hovered());
        assert_eq!(hovered.current_background().to_hex(), "#d1d5db");
    }

    #[test]
    fn test_button_paint() {
        let button = laid_out(Button::new("Small"));
        let mut canvas = RecordingCanvas::new();
        button.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(
            &canvas.commands()[1],
            DrawCommand::Text { content, .. } if content == "Small"
        ));
    }

    #[test]
    fn test_button_measure() {
        let size = Button::new("abc").measure(Constraints::unbounded());
        assert!((size.width - 3.0f32.mul_add(8.4, 24.0)).abs() < 0.01);
    }
}
