//! Slider widget for picking a value from a stepped range.

use lampkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Fill, MouseButton, Rect, Size, TypeId, Widget,
    WidgetMessage,
};
use serde::{Deserialize, Serialize};

/// Message emitted when the slider value changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    /// The new value
    pub value: f64,
}

/// Horizontal slider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    /// Current value
    value: f64,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
    /// Step increment (0.0 = continuous)
    step: f64,
    /// Track color
    track_color: Color,
    /// Active track color
    active_color: Color,
    /// Thumb color
    thumb_color: Color,
    /// Thumb radius
    thumb_radius: f32,
    /// Track height
    track_height: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether currently dragging
    #[serde(skip)]
    dragging: bool,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    /// Create a continuous slider over [0, 1].
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 1.0,
            step: 0.0,
            track_color: Color::from_rgba8(0xe5, 0xe7, 0xeb, 0xff),
            active_color: Color::from_rgba8(0x3b, 0x82, 0xf6, 0xff),
            thumb_color: Color::from_rgba8(0x3b, 0x82, 0xf6, 0xff),
            thumb_radius: 8.0,
            track_height: 4.0,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
            dragging: false,
        }
    }

    /// Set the range. `max` is raised to `min` if smaller.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max.max(min);
        self.value = self.snap(self.value);
        self
    }

    /// Set the step (0.0 = continuous).
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step.max(0.0);
        self.value = self.snap(self.value);
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = self.snap(value);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the label announced to assistive technology.
    pub fn set_accessible_name(&mut self, name: impl Into<String>) {
        self.accessible_name_value = Some(name.into());
    }

    /// Move to `value` (snapped and clamped) without emitting a message.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.snap(value);
    }

    /// Current value.
    #[must_use]
    pub const fn get_value(&self) -> f64 {
        self.value
    }

    /// Minimum value.
    #[must_use]
    pub const fn get_min(&self) -> f64 {
        self.min
    }

    /// Maximum value.
    #[must_use]
    pub const fn get_max(&self) -> f64 {
        self.max
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Value as a fraction of the range.
    #[must_use]
    pub fn normalized_value(&self) -> f64 {
        if (self.max - self.min).abs() < f64::EPSILON {
            0.0
        } else {
            (self.value - self.min) / (self.max - self.min)
        }
    }

    /// Clamp to the range and round to the nearest step.
    ///
    /// Snapped values are re-parsed at the step's precision so that
    /// 0.1 + 2 * 0.1 comes out as exactly `0.3`.
    fn snap(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { self.min };
        let mut snapped = value.clamp(self.min, self.max);
        if self.step > 0.0 {
            let steps = ((snapped - self.min) / self.step).round();
            snapped = steps.mul_add(self.step, self.min).clamp(self.min, self.max);
            let step_text = self.step.to_string();
            let decimals = step_text.split('.').nth(1).map_or(0, str::len);
            snapped = format!("{snapped:.decimals$}")
                .parse()
                .unwrap_or(snapped);
        }
        snapped
    }

    fn track_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + self.thumb_radius,
            self.bounds.y + (self.bounds.height - self.track_height) / 2.0,
            2.0f32.mul_add(-self.thumb_radius, self.bounds.width),
            self.track_height,
        )
    }

    fn value_from_x(&self, x: f32) -> f64 {
        let track = self.track_rect();
        if track.width <= 0.0 {
            return self.min;
        }
        let normalized = f64::from(((x - track.x) / track.width).clamp(0.0, 1.0));
        normalized.mul_add(self.max - self.min, self.min)
    }

    fn drag_to(&mut self, x: f32) -> Option<WidgetMessage> {
        let old = self.value;
        self.value = self.snap(self.value_from_x(x));
        if (self.value - old).abs() > f64::EPSILON {
            tracing::trace!(value = self.value, "slider moved");
            Some(Box::new(SliderChanged { value: self.value }))
        } else {
            None
        }
    }
}

impl Widget for Slider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(200.0, self.thumb_radius * 2.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let track = self.track_rect();
        canvas.fill_rounded_rect(track, self.track_height / 2.0, Fill::Solid(self.track_color));

        let active = Rect::new(
            track.x,
            track.y,
            track.width * self.normalized_value() as f32,
            track.height,
        );
        canvas.fill_rounded_rect(active, self.track_height / 2.0, Fill::Solid(self.active_color));

        let thumb_x = track.width.mul_add(self.normalized_value() as f32, track.x);
        let thumb_y = self.bounds.y + self.bounds.height / 2.0;
        let diameter = self.thumb_radius * 2.0;
        canvas.fill_rounded_rect(
            Rect::new(
                thumb_x - self.thumb_radius,
                thumb_y - self.thumb_radius,
                diameter,
                diameter,
            ),
            self.thumb_radius,
            Fill::Solid(self.thumb_color),
        );
    }

    fn event(&mut self, event: &Event) -> Option<WidgetMessage> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Event::TouchStart { position, .. } => {
                if self.bounds.contains_point(position) {
                    self.dragging = true;
                    return self.drag_to(position.x);
                }
                None
            }
            Event::MouseMove { position } if self.dragging => self.drag_to(position.x),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            }
            | Event::TouchEnd { .. }
            | Event::TouchCancel { .. } => {
                self.dragging = false;
                None
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
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
    use proptest::prelude::*;

    fn speed_slider() -> Slider {
        let mut slider = Slider::new().range(0.1, 1.0).step(0.1).value(0.3);
        // Track runs from x=8 to x=208.
        slider.layout(Rect::new(0.0, 0.0, 216.0, 16.0));
        slider
    }

    #[test]
    fn test_slider_defaults() {
        let slider = Slider::default();
        assert_eq!(slider.get_min(), 0.0);
        assert_eq!(slider.get_max(), 1.0);
        assert_eq!(slider.get_value(), 0.0);
        assert_eq!(slider.accessible_role(), AccessibleRole::Slider);
    }

    #[test]
    fn test_slider_value_clamped() {
        let slider = Slider::new().range(0.1, 1.0).value(3.0);
        assert_eq!(slider.get_value(), 1.0);
        let slider = Slider::new().range(0.1, 1.0).value(-3.0);
        assert_eq!(slider.get_value(), 0.1);
    }

    #[test]
    fn test_slider_step_is_exact() {
        let slider = Slider::new().range(0.1, 1.0).step(0.1).value(0.31);
        assert_eq!(slider.get_value(), 0.3);
        assert_eq!(slider.get_value().to_string(), "0.3");
    }

    #[test]
    fn test_slider_rejects_nan() {
        let mut slider = speed_slider();
        slider.set_value(f64::NAN);
        assert_eq!(slider.get_value(), 0.1);
    }

    #[test]
    fn test_slider_drag() {
        let mut slider = speed_slider();
        let msg = slider
            .event(&Event::MouseDown {
                position: Point::new(208.0, 8.0),
                button: MouseButton::Left,
            })
            .expect("changed");
        assert_eq!(msg.downcast_ref::<SliderChanged>(), Some(&SliderChanged { value: 1.0 }));
        assert!(slider.is_dragging());

        let msg = slider
            .event(&Event::MouseMove {
                position: Point::new(8.0, 8.0),
            })
            .expect("changed");
        assert_eq!(msg.downcast_ref::<SliderChanged>(), Some(&SliderChanged { value: 0.1 }));

        slider.event(&Event::MouseUp {
            position: Point::new(8.0, 8.0),
            button: MouseButton::Left,
        });
        assert!(!slider.is_dragging());
        assert!(slider
            .event(&Event::MouseMove {
                position: Point::new(208.0, 8.0)
            })
            .is_none());
    }

    #[test]
    fn test_slider_no_message_without_change() {
        let mut slider = speed_slider();
        // x = 8 + 200 * (0.2 / 0.9) lands on 0.3
        let x = 200.0f32.mul_add(0.2 / 0.9, 8.0);
        assert!(slider
            .event(&Event::MouseDown {
                position: Point::new(x, 8.0),
                button: MouseButton::Left,
            })
            .is_none());
    }

    #[test]
    fn test_slider_paint_three_shapes() {
        let slider = speed_slider();
        let mut canvas = RecordingCanvas::new();
        slider.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 3);
        assert!(canvas
            .commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::Rect { .. })));
    }

    proptest! {
        #[test]
        fn prop_snapped_value_in_range(v in -5.0f64..5.0) {
            let slider = Slider::new().range(0.1, 1.0).step(0.1).value(v);
            let value = slider.get_value();
            prop_assert!((0.1..=1.0).contains(&value));
            let tenths = value * 10.0;
            prop_assert!((tenths - tenths.round()).abs() < 1e-9);
        }
    }
}
