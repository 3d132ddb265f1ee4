//! Test harness for Lampkit widgets.
//!
//! Drives a widget with simulated pointer gestures and simulated time.

use lampkit_core::{
    Event, MouseButton, Point, RecordingCanvas, Rect, TouchId, Widget, WidgetMessage,
};

use crate::selector::Selector;

/// Length of one simulated frame in seconds.
pub const FRAME: f64 = 1.0 / 60.0;

/// Test harness for interacting with a widget tree.
pub struct Harness<W: Widget + 'static> {
    /// Root widget being tested
    root: W,
    /// Current viewport
    viewport: Rect,
    /// Messages the root returned from `event`
    messages: Vec<WidgetMessage>,
    /// Simulated seconds since creation
    elapsed: f64,
}

impl<W: Widget + 'static> Harness<W> {
    /// Create a harness and lay the root out in a 1280x720 viewport.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            messages: Vec::new(),
            elapsed: 0.0,
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// Lay the root out again, e.g. after its props changed size.
    pub fn relayout(&mut self) -> &mut Self {
        self.root.layout(self.viewport);
        self
    }

    /// Root widget.
    pub const fn root(&self) -> &W {
        &self.root
    }

    /// Root widget, mutably.
    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    // === Event Simulation ===

    /// Deliver a raw event to the root.
    pub fn send(&mut self, event: &Event) -> &mut Self {
        if let Some(message) = self.root.event(event) {
            self.messages.push(message);
        }
        self
    }

    /// Move the pointer over a widget.
    pub fn hover(&mut self, selector: &str) -> &mut Self {
        if let Some(center) = self.center_of(selector) {
            self.send(&Event::MouseMove { position: center });
        }
        self
    }

    /// Press the left button on a widget without releasing.
    pub fn press(&mut self, selector: &str) -> &mut Self {
        if let Some(center) = self.center_of(selector) {
            self.send(&Event::MouseMove { position: center });
            self.send(&Event::MouseDown {
                position: center,
                button: MouseButton::Left,
            });
        }
        self
    }

    /// Release the left button over a widget.
    pub fn release(&mut self, selector: &str) -> &mut Self {
        if let Some(center) = self.center_of(selector) {
            self.release_at(center);
        }
        self
    }

    /// Release the left button at an arbitrary point.
    pub fn release_at(&mut self, position: Point) -> &mut Self {
        self.send(&Event::MouseMove { position });
        self.send(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    /// Simulate a click on a widget matching the selector.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(center) = self.center_of(selector) {
            self.click_at(center);
        }
        self
    }

    /// Click at an arbitrary point.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.send(&Event::MouseMove { position });
        self.send(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.send(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    /// Simulate a tap on a widget.
    pub fn tap(&mut self, selector: &str) -> &mut Self {
        if let Some(position) = self.center_of(selector) {
            let id = TouchId(0);
            self.send(&Event::TouchStart { id, position });
            self.send(&Event::TouchEnd { id, position });
        }
        self
    }

    /// Put a finger down on a widget, then let the platform cancel the touch.
    pub fn cancelled_tap(&mut self, selector: &str) -> &mut Self {
        if let Some(position) = self.center_of(selector) {
            let id = TouchId(0);
            self.send(&Event::TouchStart { id, position });
            self.send(&Event::TouchCancel { id });
        }
        self
    }

    /// Move the pointer out of the root.
    pub fn leave(&mut self) -> &mut Self {
        self.send(&Event::MouseLeave)
    }

    // === Time ===

    /// Advance simulated time in frame-sized steps.
    pub fn advance(&mut self, seconds: f64) -> &mut Self {
        let mut remaining = seconds.max(0.0);
        while remaining > 1e-12 {
            let dt = remaining.min(FRAME);
            self.root.tick(dt);
            self.elapsed += dt;
            remaining -= dt;
        }
        self
    }

    /// Advance until nothing animates or `limit` seconds pass. Returns
    /// whether the root came to rest.
    pub fn settle(&mut self, limit: f64) -> bool {
        let mut waited = 0.0;
        while self.root.is_animating() && waited < limit {
            self.advance(FRAME);
            waited += FRAME;
        }
        !self.root.is_animating()
    }

    /// Simulated seconds since the harness was created.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    // === Messages ===

    /// Take every message collected so far.
    pub fn take_messages(&mut self) -> Vec<WidgetMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Number of collected messages of type `T`.
    #[must_use]
    pub fn count_messages<T: 'static>(&self) -> usize {
        self.messages.iter().filter(|m| m.is::<T>()).count()
    }

    /// Most recent collected message of type `T`.
    #[must_use]
    pub fn last_message<T: 'static>(&self) -> Option<&T> {
        self.messages.iter().rev().find_map(|m| m.downcast_ref::<T>())
    }

    // === Queries ===

    /// Query for a widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        self.query_all(selector).into_iter().next()
    }

    /// Query for all widgets matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all(&self.root, &sel, &mut results);
        results
    }

    /// Accessible name of a widget.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .and_then(Widget::accessible_name)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Bounds of a widget.
    #[must_use]
    pub fn bounds(&self, selector: &str) -> Option<Rect> {
        self.query(selector).map(Widget::bounds)
    }

    /// Paint the root into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    // === Internal ===

    fn center_of(&self, selector: &str) -> Option<Point> {
        self.bounds(selector).map(|b| b.center())
    }
}

fn find_all<'a>(widget: &'a dyn Widget, selector: &Selector, results: &mut Vec<&'a dyn Widget>) {
    if selector.matches(widget) {
        results.push(widget);
    }
    widget.visit_children(&mut |child| find_all(child, selector, results));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lampkit_core::{widget::LayoutResult, Canvas, Constraints, Fill, Size, TypeId};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Clicked;

    // Mock widget for testing
    #[derive(Default)]
    struct MockWidget {
        test_id: Option<String>,
        name: Option<String>,
        bounds: Rect,
        pressed: bool,
        ticked: f64,
        children: Vec<MockWidget>,
    }

    impl MockWidget {
        fn new(id: &str) -> Self {
            Self {
                test_id: Some(id.to_string()),
                ..Self::default()
            }
        }

        fn with_name(mut self, name: &str) -> Self {
            self.name = Some(name.to_string());
            self
        }

        fn with_child(mut self, child: Self) -> Self {
            self.children.push(child);
            self
        }
    }

    impl Widget for MockWidget {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(100.0, 50.0))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            self.bounds = Rect::new(b.x, b.y, 100.0, 50.0);
            for (i, child) in self.children.iter_mut().enumerate() {
                child.layout(Rect::new(200.0 * (i + 1) as f32, 0.0, 100.0, 50.0));
            }
            LayoutResult { size: b.size() }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rounded_rect(self.bounds, 0.0, Fill::Solid(lampkit_core::Color::WHITE));
        }
        fn event(&mut self, event: &Event) -> Option<WidgetMessage> {
            match event {
                Event::MouseDown { position, .. } | Event::TouchStart { position, .. } => {
                    self.pressed = self.bounds.contains_point(position);
                    None
                }
                Event::MouseUp { position, .. } | Event::TouchEnd { position, .. } => {
                    let hit = self.pressed && self.bounds.contains_point(position);
                    self.pressed = false;
                    hit.then(|| Box::new(Clicked) as WidgetMessage)
                }
                Event::TouchCancel { .. } | Event::MouseLeave => {
                    self.pressed = false;
                    None
                }
                _ => None,
            }
        }
        fn tick(&mut self, dt: f64) {
            self.ticked += dt;
        }
        fn is_animating(&self) -> bool {
            self.ticked < 0.5
        }
        fn test_id(&self) -> Option<&str> {
            self.test_id.as_deref()
        }
        fn accessible_name(&self) -> Option<&str> {
            self.name.as_deref()
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
        fn visit_children<'a>(&'a self, visitor: &mut dyn FnMut(&'a dyn Widget)) {
            for child in &self.children {
                visitor(child);
            }
        }
    }

    #[test]
    fn test_harness_query_children() {
        let root = MockWidget::new("root")
            .with_child(MockWidget::new("a").with_name("Alpha"))
            .with_child(MockWidget::new("b"));
        let harness = Harness::new(root);

        harness.assert_exists("#root").assert_exists("[data-testid='b']");
        harness.assert_text("#a", "Alpha");
        harness.assert_count("[aria-label='Alpha']", 1);
        assert!(!harness.exists("#missing"));
        assert_eq!(harness.bounds("#b"), Some(Rect::new(400.0, 0.0, 100.0, 50.0)));
    }

    #[test]
    fn test_harness_click_collects_message() {
        let mut harness = Harness::new(MockWidget::new("root"));
        harness.click("#root");
        assert_eq!(harness.count_messages::<Clicked>(), 1);
        assert_eq!(harness.last_message::<Clicked>(), Some(&Clicked));
        assert_eq!(harness.take_messages().len(), 1);
        assert_eq!(harness.count_messages::<Clicked>(), 0);
    }

    #[test]
    fn test_harness_press_then_leave_aborts() {
        let mut harness = Harness::new(MockWidget::new("root"));
        harness.press("#root").leave().release("#root");
        assert_eq!(harness.count_messages::<Clicked>(), 0);
    }

    #[test]
    fn test_harness_tap_and_cancelled_tap() {
        let mut harness = Harness::new(MockWidget::new("root"));
        harness.tap("#root");
        harness.cancelled_tap("#root");
        assert_eq!(harness.count_messages::<Clicked>(), 1);
    }

    #[test]
    fn test_harness_release_outside() {
        let mut harness = Harness::new(MockWidget::new("root"));
        harness.press("#root").release_at(Point::new(900.0, 900.0));
        assert_eq!(harness.count_messages::<Clicked>(), 0);
    }

    #[test]
    fn test_harness_missing_selector_is_noop() {
        let mut harness = Harness::new(MockWidget::new("root"));
        harness.click("#nope").tap("[role='switch']");
        assert!(harness.take_messages().is_empty());
    }

    #[test]
    fn test_harness_advance_in_frames() {
        let mut harness = Harness::new(MockWidget::new("root"));
        harness.advance(0.25);
        assert!((harness.root().ticked - 0.25).abs() < 1e-9);
        assert!((harness.elapsed() - 0.25).abs() < 1e-9);
        assert!(harness.settle(2.0));
        assert!(harness.root().ticked >= 0.5);
    }

    #[test]
    fn test_harness_paint() {
        let harness = Harness::new(MockWidget::new("root")).viewport(320.0, 240.0);
        assert_eq!(harness.paint().command_count(), 1);
    }
}
