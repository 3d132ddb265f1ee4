//! Hanging-lamp theme toggle.
//!
//! The lamp is fully controlled: it never flips its own theme. A completed
//! click or tap invokes `on_toggle` and yields a [`LampToggled`] message; the
//! parent then renders a new [`LampConfig`] and the lamp animates towards the
//! matching look.

mod config;
mod markup;
mod visual;

pub use config::{
    LampConfig, LampDimensions, LampPlacement, LampSize, LampSizeParseError, ToggleCallback,
    CABLE_WIDTH, DEFAULT_ANIMATION_DURATION,
};
pub use visual::{
    Gesture, LampProperty, LampVisual, COLOR_TRANSITION, LIGHT_FADE, PULSE_HIGH, PULSE_LOW,
    PULSE_PERIOD,
};

use lampkit_core::{
    widget::{AccessibleRole, LayoutResult},
    AnimationController, Animator, Canvas, Constraints, Easing, Event, Keyframe, KeyframeTrack,
    MouseButton, Point, Rect, Size, Transform2D, TypeId, Widget, WidgetMessage,
};

/// Message emitted for every completed click or tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampToggled {
    /// Theme the lamp was showing when clicked
    pub was_dark: bool,
}

/// Distance of the outer and inner halo rings outside the shade.
const HALO_RINGS: [f32; 2] = [32.0, 16.0];

/// Animated lamp that switches between light and dark themes.
#[derive(Debug)]
pub struct LampToggle {
    config: LampConfig,
    motion: AnimationController<LampProperty>,
    hovered: bool,
    pressed: bool,
    mounted: bool,
    bounds: Rect,
}

impl LampToggle {
    /// Mount a lamp. Properties start on their settled values; a lit lamp
    /// starts pulsing right away.
    #[must_use]
    pub fn new(config: LampConfig) -> Self {
        let mut lamp = Self {
            config: config.sanitized(),
            motion: AnimationController::new(),
            hovered: false,
            pressed: false,
            mounted: true,
            bounds: Rect::default(),
        };
        lamp.sync();
        lamp
    }

    /// Re-render with new props.
    pub fn set_config(&mut self, config: LampConfig) {
        let config = config.sanitized();
        if config.is_dark != self.config.is_dark {
            tracing::debug!(is_dark = config.is_dark, size = %config.size, "lamp theme changed");
        }
        self.config = config;
        self.sync();
    }

    /// Current props.
    #[must_use]
    pub const fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Whether the lamp is lit (light theme).
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.config.is_on()
    }

    /// Dimensions of the configured size.
    #[must_use]
    pub const fn dimensions(&self) -> LampDimensions {
        self.config.dimensions()
    }

    /// Pointer gesture acting on the body.
    #[must_use]
    pub const fn gesture(&self) -> Gesture {
        if self.pressed {
            Gesture::Pressed
        } else if self.hovered {
            Gesture::Hovered
        } else {
            Gesture::Idle
        }
    }

    /// Resting visual for the current props and gesture.
    #[must_use]
    pub fn settled_visual(&self) -> LampVisual {
        LampVisual::settled(&self.config, self.gesture())
    }

    /// Interpolated visual at the current animation time.
    #[must_use]
    pub fn current_visual(&self) -> LampVisual {
        let mut visual = self.settled_visual();
        for property in LampProperty::EASED
            .into_iter()
            .chain(std::iter::once(LampProperty::InnerLight))
        {
            if let Some(value) = self.motion.value(property) {
                visual.set(property, value as f32);
            }
        }
        visual.pulse_active = self.is_pulsing();
        visual
    }

    /// Whether the inner light pulse is running.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.motion.is_looping(LampProperty::InnerLight)
    }

    /// Advance animations by `dt` seconds. Returns the properties that came
    /// to rest during this step.
    pub fn tick(&mut self, dt: f64) -> Vec<LampProperty> {
        self.motion.tick(dt)
    }

    /// Stop every animation, the pulse included. The lamp stays inert
    /// afterwards.
    pub fn unmount(&mut self) {
        tracing::debug!(size = %self.config.size, "lamp unmounted");
        self.motion.cancel_all();
        self.mounted = false;
        self.hovered = false;
        self.pressed = false;
    }

    /// Whether [`Self::unmount`] was called.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Shade rectangle before scaling.
    #[must_use]
    pub fn body_rect(&self) -> Rect {
        let dims = self.dimensions();
        Rect::new(
            self.bounds.x,
            self.bounds.y + dims.cable_length,
            dims.body_width,
            dims.body_height,
        )
    }

    /// Cable rectangle before scaling.
    #[must_use]
    pub fn cable_rect(&self) -> Rect {
        let dims = self.dimensions();
        Rect::new(
            self.bounds.center().x - dims.cable_width / 2.0,
            self.bounds.y,
            dims.cable_width,
            dims.cable_length,
        )
    }

    fn sync(&mut self) {
        if !self.mounted {
            return;
        }
        let is_on = self.is_on();
        let gesture = self.gesture();
        let base = self.config.animation_duration;
        for property in LampProperty::EASED {
            self.motion
                .animate(property, property.target(is_on, gesture), property.duration(base));
        }

        if is_on {
            if !self.is_pulsing() {
                self.motion.start_keyframes(LampProperty::InnerLight, pulse_track());
            }
        } else {
            self.motion
                .animate(LampProperty::InnerLight, 0.0, LampProperty::InnerLight.duration(base));
        }
    }

    fn sync_body(&mut self) {
        if !self.mounted {
            return;
        }
        let property = LampProperty::BodyScale;
        self.motion.animate(
            property,
            property.target(self.is_on(), self.gesture()),
            property.duration(self.config.animation_duration),
        );
    }

    fn hit_test(&self, position: &Point) -> bool {
        self.body_rect().contains_point(position)
    }

    fn set_gesture(&mut self, hovered: bool, pressed: bool) {
        if (hovered, pressed) != (self.hovered, self.pressed) {
            self.hovered = hovered;
            self.pressed = pressed;
            self.sync_body();
        }
    }

    fn press(&mut self, position: &Point) -> Option<WidgetMessage> {
        if self.hit_test(position) {
            self.set_gesture(self.hovered, true);
        }
        None
    }

    fn release(&mut self, position: &Point, hovered: bool) -> Option<WidgetMessage> {
        let was_pressed = self.pressed;
        self.set_gesture(hovered, false);
        if was_pressed && self.hit_test(position) {
            Some(self.fire())
        } else {
            None
        }
    }

    fn fire(&self) -> WidgetMessage {
        tracing::debug!(was_dark = self.config.is_dark, "lamp clicked");
        if let Some(on_toggle) = &self.config.on_toggle {
            on_toggle();
        }
        Box::new(LampToggled {
            was_dark: self.config.is_dark,
        })
    }
}

fn pulse_track() -> KeyframeTrack<f64> {
    KeyframeTrack::new(PULSE_PERIOD)
        .with_keyframe(Keyframe::new(0.0, PULSE_LOW).with_easing(Easing::EaseInOut))
        .with_keyframe(Keyframe::new(0.5, PULSE_HIGH).with_easing(Easing::EaseInOut))
        .with_keyframe(Keyframe::new(1.0, PULSE_LOW))
        .with_loop(true)
}

/// Shade outline: a trapezoid narrower at the bottom.
fn shade_outline(body: Rect) -> [Point; 4] {
    [
        body.fraction_point(0.08, 0.0),
        body.fraction_point(0.92, 0.0),
        body.fraction_point(0.88, 1.0),
        body.fraction_point(0.12, 1.0),
    ]
}

/// Inner light outline, inset 4 px inside the shade and covering its top half.
fn light_outline(body: Rect) -> [Point; 4] {
    let inner = body.inset(4.0);
    [
        inner.fraction_point(0.0, 0.0),
        inner.fraction_point(0.94, 0.0),
        inner.fraction_point(0.91, 0.5),
        inner.fraction_point(0.09, 0.5),
    ]
}

impl Widget for LampToggle {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let dims = self.dimensions();
        constraints.constrain(Size::new(
            dims.body_width,
            dims.total_height() + self.config.placement.top_offset(),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let dims = self.dimensions();
        self.bounds = Rect::new(
            bounds.center().x - dims.body_width / 2.0,
            bounds.y + self.config.placement.top_offset(),
            dims.body_width,
            dims.total_height(),
        );
        LayoutResult {
            size: self.bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let visual = self.current_visual();
        let body = self.body_rect();

        let cable = self.cable_rect();
        canvas.push_transform(Transform2D::scale_about(
            cable.center(),
            1.0,
            visual.cable_scale_y,
        ));
        canvas.fill_rounded_rect(cable, 0.0, visual.cable_fill());
        canvas.pop_transform();

        canvas.push_transform(Transform2D::scale_about(
            body.center(),
            visual.body_scale,
            visual.body_scale,
        ));

        if visual.halo_opacity > 0.0 {
            canvas.push_opacity(visual.halo_opacity);
            canvas.push_transform(Transform2D::scale_about(
                body.center(),
                visual.halo_scale,
                visual.halo_scale,
            ));
            for (ring, fill) in HALO_RINGS.into_iter().zip(LampVisual::halo_fills()) {
                let rect = body.outset(ring);
                canvas.fill_rounded_rect(rect, rect.height / 2.0, fill);
            }
            canvas.pop_transform();
            canvas.pop_opacity();
        }

        let shade = shade_outline(body);
        for shadow in visual.shadows() {
            canvas.cast_shadow(&shade, shadow);
        }
        canvas.fill_polygon(&shade, visual.body_fill());

        if visual.inner_light_opacity > 0.0 {
            canvas.push_opacity(visual.inner_light_opacity);
            canvas.fill_polygon(&light_outline(body), LampVisual::inner_light_fill());
            canvas.pop_opacity();
        }

        let (top_color, bottom_color) = visual.detail_colors();
        let center_x = body.center().x;
        canvas.fill_rect(Rect::new(center_x - 48.0, body.y + 4.0, 96.0, 2.0), top_color);
        canvas.fill_rect(
            Rect::new(center_x - 64.0, body.bottom() - 6.0, 128.0, 2.0),
            bottom_color,
        );

        canvas.pop_transform();
    }

    fn event(&mut self, event: &Event) -> Option<WidgetMessage> {
        if !self.mounted {
            return None;
        }

        match event {
            Event::MouseEnter => {
                self.set_gesture(true, self.pressed);
                None
            }
            Event::MouseLeave => {
                self.set_gesture(false, false);
                None
            }
            Event::MouseMove { position } => {
                self.set_gesture(self.hit_test(position), self.pressed);
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.press(position),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let hovered = self.hit_test(position);
                self.release(position, hovered)
            }
            Event::TouchStart { position, .. } => self.press(position),
            Event::TouchEnd { position, .. } => self.release(position, false),
            Event::TouchCancel { .. } => {
                self.set_gesture(self.hovered, false);
                None
            }
            _ => None,
        }
    }

    fn tick(&mut self, dt: f64) {
        Self::tick(self, dt);
    }

    fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    fn unmount(&mut self) {
        Self::unmount(self);
    }

    fn is_interactive(&self) -> bool {
        self.mounted
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(if self.config.is_dark {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        })
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.config.test_id.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lampkit_core::{DrawCommand, Fill, RecordingCanvas, TouchId};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, LampConfig) {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = hits.clone();
        let config = LampConfig::new(false).on_toggle(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (hits, config)
    }

    fn laid_out(config: LampConfig) -> LampToggle {
        let mut lamp = LampToggle::new(config.placement(LampPlacement::Inline));
        lamp.layout(Rect::new(0.0, 0.0, 224.0, 70.0));
        lamp
    }

    fn body_center(lamp: &LampToggle) -> Point {
        lamp.body_rect().center()
    }

    fn down(position: Point) -> Event {
        Event::MouseDown {
            position,
            button: MouseButton::Left,
        }
    }

    fn up(position: Point) -> Event {
        Event::MouseUp {
            position,
            button: MouseButton::Left,
        }
    }

    // ===== Construction =====

    #[test]
    fn test_new_is_settled() {
        let lamp = LampToggle::new(LampConfig::new(true));
        assert_eq!(lamp.current_visual(), lamp.settled_visual());
        assert!(!lamp.is_animating());
        assert!(!lamp.is_on());
    }

    #[test]
    fn test_new_lit_lamp_pulses() {
        let lamp = LampToggle::new(LampConfig::new(false));
        assert!(lamp.is_on());
        assert!(lamp.is_pulsing());
        assert!(lamp.is_animating());
        assert!((lamp.current_visual().inner_light_opacity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_duration_falls_back() {
        let lamp = LampToggle::new(LampConfig::new(false).animation_duration(-2.0));
        assert_eq!(lamp.config().animation_duration, DEFAULT_ANIMATION_DURATION);
    }

    // ===== Layout =====

    #[test]
    fn test_layout_fixed_top_center() {
        let mut lamp = LampToggle::new(LampConfig::new(false).size(LampSize::Small));
        let result = lamp.layout(Rect::new(0.0, 0.0, 1000.0, 800.0));
        assert_eq!(result.size, Size::new(128.0, 44.0));
        assert_eq!(lamp.bounds(), Rect::new(436.0, 16.0, 128.0, 44.0));
        assert_eq!(lamp.body_rect(), Rect::new(436.0, 36.0, 128.0, 24.0));
        assert_eq!(lamp.cable_rect(), Rect::new(498.0, 16.0, 4.0, 20.0));
    }

    #[test]
    fn test_measure_inline() {
        let lamp = LampToggle::new(
            LampConfig::new(false)
                .size(LampSize::Large)
                .placement(LampPlacement::Inline),
        );
        assert_eq!(
            lamp.measure(Constraints::unbounded()),
            Size::new(320.0, 96.0)
        );
    }

    // ===== Interaction =====

    #[test]
    fn test_click_invokes_callback_once() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        let center = body_center(&lamp);

        assert!(lamp.event(&down(center)).is_none());
        let msg = lamp.event(&up(center)).expect("click message");
        let toggled = msg.downcast_ref::<LampToggled>().expect("LampToggled");
        assert!(!toggled.was_dark);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_click_does_not_change_theme() {
        let (_hits, config) = counter();
        let mut lamp = laid_out(config);
        let center = body_center(&lamp);
        let before = lamp.settled_visual();
        lamp.event(&down(center));
        lamp.event(&up(center));
        lamp.event(&Event::MouseLeave);
        assert!(lamp.is_on());
        assert_eq!(lamp.settled_visual(), before);
    }

    #[test]
    fn test_hover_and_press_do_not_toggle() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        let center = body_center(&lamp);

        lamp.event(&Event::MouseEnter);
        lamp.event(&Event::MouseMove { position: center });
        lamp.event(&down(center));
        assert_eq!(lamp.gesture(), Gesture::Pressed);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_outside_aborts() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        lamp.event(&down(body_center(&lamp)));
        assert!(lamp.event(&up(Point::new(-50.0, -50.0))).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(lamp.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_leave_aborts_press() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        let center = body_center(&lamp);
        lamp.event(&down(center));
        lamp.event(&Event::MouseLeave);
        assert!(lamp.event(&up(center)).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        lamp.event(&down(Point::new(1.0, 1.0)));
        assert!(lamp.event(&up(body_center(&lamp))).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_tap_toggles() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        let position = body_center(&lamp);
        lamp.event(&Event::TouchStart {
            id: TouchId(1),
            position,
        });
        assert!(lamp
            .event(&Event::TouchEnd {
                id: TouchId(1),
                position
            })
            .is_some());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_touch_cancel_aborts() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        let position = body_center(&lamp);
        lamp.event(&Event::TouchStart {
            id: TouchId(1),
            position,
        });
        lamp.event(&Event::TouchCancel { id: TouchId(1) });
        assert!(lamp
            .event(&Event::TouchEnd {
                id: TouchId(1),
                position
            })
            .is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_callback_still_emits_message() {
        let mut lamp = laid_out(LampConfig::new(true));
        let center = body_center(&lamp);
        lamp.event(&down(center));
        let msg = lamp.event(&up(center)).expect("message");
        assert!(msg.downcast_ref::<LampToggled>().is_some_and(|m| m.was_dark));
    }

    #[test]
    fn test_hover_animates_body_scale() {
        let mut lamp = laid_out(LampConfig::new(false));
        lamp.event(&Event::MouseEnter);
        assert!((lamp.settled_visual().body_scale - 1.02).abs() < 1e-6);
        lamp.tick(0.3);
        assert!((lamp.current_visual().body_scale - 1.02).abs() < 1e-6);
        lamp.event(&Event::MouseLeave);
        lamp.tick(0.3);
        assert!((lamp.current_visual().body_scale - 1.0).abs() < 1e-6);
    }

    // ===== Animation =====

    #[test]
    fn test_theme_change_animates_to_off() {
        let mut lamp = laid_out(LampConfig::new(false));
        lamp.set_config(LampConfig::new(true).placement(LampPlacement::Inline));
        assert!(lamp.is_animating());
        assert!(!lamp.is_pulsing());

        let mid = lamp.current_visual();
        assert!(mid.halo_opacity > 0.0);

        lamp.tick(0.6);
        assert_eq!(lamp.current_visual(), lamp.settled_visual());
        assert!(!lamp.is_animating());
    }

    #[test]
    fn test_tick_reports_settled_properties() {
        let mut lamp = laid_out(LampConfig::new(true));
        lamp.set_config(LampConfig::new(false).placement(LampPlacement::Inline));
        let settled = lamp.tick(0.35);
        assert!(settled.contains(&LampProperty::CableScale));
        assert!(settled.contains(&LampProperty::BodyScale));
        assert!(!settled.contains(&LampProperty::Glow));
        let settled = lamp.tick(0.2);
        assert!(settled.contains(&LampProperty::Glow));
        assert!(settled.contains(&LampProperty::ThemeMix));
        assert!(!settled.contains(&LampProperty::InnerLight));
    }

    #[test]
    fn test_round_trip_returns_to_same_visual() {
        let mut lamp = laid_out(LampConfig::new(false));
        let on = lamp.settled_visual();
        for is_dark in [true, false, true, false] {
            lamp.set_config(LampConfig::new(is_dark).placement(LampPlacement::Inline));
            lamp.tick(1.0);
        }
        assert_eq!(lamp.settled_visual(), on);
        assert!(lamp.is_pulsing());
    }

    #[test]
    fn test_duration_change_mid_transition_is_continuous() {
        let mut lamp = laid_out(LampConfig::new(false).animation_duration(1.0));
        lamp.set_config(
            LampConfig::new(true)
                .animation_duration(1.0)
                .placement(LampPlacement::Inline),
        );
        lamp.tick(0.4);
        let before = lamp.current_visual();
        lamp.set_config(
            LampConfig::new(true)
                .animation_duration(0.1)
                .placement(LampPlacement::Inline),
        );
        let after = lamp.current_visual();
        for property in LampProperty::EASED {
            assert!((before.get(property) - after.get(property)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_unmount_stops_everything() {
        let (hits, config) = counter();
        let mut lamp = laid_out(config);
        lamp.unmount();
        assert!(!lamp.is_animating());
        assert!(lamp.tick(5.0).is_empty());
        lamp.set_config(LampConfig::new(true));
        assert!(!lamp.is_animating());

        let center = body_center(&lamp);
        assert!(lamp.event(&down(center)).is_none());
        assert!(lamp.event(&up(center)).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    // ===== Paint =====

    #[test]
    fn test_paint_lit_lamp() {
        let lamp = laid_out(LampConfig::new(false));
        let mut canvas = RecordingCanvas::new();
        lamp.paint(&mut canvas);

        let polygons = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count();
        assert_eq!(polygons, 2, "shade and inner light");
        let shadows = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Shadow { .. }))
            .count();
        assert_eq!(shadows, 2);
        let halos = canvas
            .commands()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::Rect {
                        fill: Fill::RadialGradient { .. },
                        ..
                    }
                )
            })
            .count();
        assert_eq!(halos, 2);
    }

    #[test]
    fn test_paint_dark_lamp_hides_light_and_halo() {
        let lamp = laid_out(LampConfig::new(true));
        let mut canvas = RecordingCanvas::new();
        lamp.paint(&mut canvas);

        let polygons = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count();
        assert_eq!(polygons, 1);
        assert!(!canvas.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Rect {
                fill: Fill::RadialGradient { .. },
                ..
            }
        )));
    }

    #[test]
    fn test_paint_shade_is_trapezoid() {
        let lamp = laid_out(LampConfig::new(false));
        let mut canvas = RecordingCanvas::new();
        lamp.paint(&mut canvas);

        let shade = canvas
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Polygon { points, .. } => Some(points.clone()),
                _ => None,
            })
            .expect("shade polygon");
        let body = lamp.body_rect();
        assert!((shade[0].x - (body.x + body.width * 0.08)).abs() < 1e-3);
        assert!((shade[2].x - (body.x + body.width * 0.88)).abs() < 1e-3);
        assert!((shade[2].y - body.bottom()).abs() < 1e-3);
    }

    #[test]
    fn test_accessibility() {
        let lamp = LampToggle::new(LampConfig::new(false).test_id("main-lamp"));
        assert_eq!(lamp.accessible_role(), AccessibleRole::Switch);
        assert_eq!(lamp.accessible_name(), Some("Switch to dark theme"));
        assert_eq!(Widget::test_id(&lamp), Some("main-lamp"));
        assert!(lamp.is_interactive());
    }
}
