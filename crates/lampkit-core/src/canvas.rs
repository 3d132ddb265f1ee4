//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, Fill, Shadow, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// A Canvas that records draw operations as [`DrawCommand`]s.
///
/// Transforms and opacity layers are resolved at record time, so the stored
/// commands hold final geometry and final alpha. This is what the tests,
/// the JSON dump and the HTML export consume.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
    opacity_stack: Vec<f32>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Combined transform of every pushed layer.
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }

    /// Combined opacity of every pushed layer.
    #[must_use]
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    fn map_points(&self, points: &[Point]) -> Vec<Point> {
        let t = self.current_transform();
        points.iter().map(|p| t.apply(*p)).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rounded_rect(rect, 0.0, Fill::Solid(color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Fill) {
        let t = self.current_transform();
        self.commands.push(DrawCommand::Rect {
            bounds: t.apply_rect(rect),
            radius: radius * t.scale_x().abs(),
            fill: fill.fade(self.current_opacity()),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let bounds = self.current_transform().apply_rect(rect);
        self.commands.push(DrawCommand::Stroke {
            bounds,
            color: color.fade(self.current_opacity()),
            width,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Fill) {
        let points = self.map_points(points);
        self.commands.push(DrawCommand::Polygon {
            points,
            fill: fill.fade(self.current_opacity()),
        });
    }

    fn cast_shadow(&mut self, points: &[Point], shadow: Shadow) {
        let points = self.map_points(points);
        let shadow = Shadow {
            color: shadow.color.fade(self.current_opacity()),
            ..shadow
        };
        self.commands.push(DrawCommand::Shadow { points, shadow });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let position = self.current_transform().apply(position);
        let style = TextStyle {
            color: style.color.fade(self.current_opacity()),
            ..style.clone()
        };
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style,
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }

    fn push_opacity(&mut self, opacity: f32) {
        let combined = self.current_opacity() * opacity.clamp(0.0, 1.0);
        self.opacity_stack.push(combined);
    }

    fn pop_opacity(&mut self) {
        self.opacity_stack.pop();
    }
}
