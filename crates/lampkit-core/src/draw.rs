//! Draw commands produced by painting.
//!
//! Every renderer (HTML export, JSON dump, tests) consumes these primitives.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// How a shape is filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// Single color
    Solid(Color),
    /// Top-to-bottom linear gradient
    VerticalGradient {
        /// Color at the top edge
        top: Color,
        /// Color at the bottom edge
        bottom: Color,
    },
    /// Circular gradient fading outward from the center
    RadialGradient {
        /// Color at the center
        inner: Color,
        /// Color at the edge
        outer: Color,
    },
}

impl Fill {
    /// Apply an opacity factor to every stop.
    #[must_use]
    pub fn fade(&self, factor: f32) -> Self {
        match self {
            Self::Solid(c) => Self::Solid(c.fade(factor)),
            Self::VerticalGradient { top, bottom } => Self::VerticalGradient {
                top: top.fade(factor),
                bottom: bottom.fade(factor),
            },
            Self::RadialGradient { inner, outer } => Self::RadialGradient {
                inner: inner.fade(factor),
                outer: outer.fade(factor),
            },
        }
    }

    /// CSS `background` value for this fill.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Solid(c) => c.to_css(),
            Self::VerticalGradient { top, bottom } => format!(
                "linear-gradient(to bottom, {}, {})",
                top.to_css(),
                bottom.to_css()
            ),
            Self::RadialGradient { inner, outer } => format!(
                "radial-gradient(circle, {}, {})",
                inner.to_css(),
                outer.to_css()
            ),
        }
    }
}

/// Drop shadow or glow around a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Shadow {
    /// Centered glow with the given blur.
    #[must_use]
    pub const fn glow(color: Color, blur: f32) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur,
        }
    }

    /// Component-wise interpolation between two shadows.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            color: self.color.lerp(&other.color, t),
            offset_x: (other.offset_x - self.offset_x).mul_add(t, self.offset_x),
            offset_y: (other.offset_y - self.offset_y).mul_add(t, self.offset_y),
            blur: (other.blur - self.blur).mul_add(t, self.blur),
        }
    }

    /// CSS `box-shadow` fragment.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.color.to_css()
        )
    }
}

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Transform2D {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Translation.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Scale around the origin.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Scale around an arbitrary pivot.
    #[must_use]
    pub fn scale_about(pivot: Point, sx: f32, sy: f32) -> Self {
        Self::translate(pivot.x, pivot.y)
            .then(&Self::scale(sx, sy))
            .then(&Self::translate(-pivot.x, -pivot.y))
    }

    /// `self * other`: `other` is applied first, then `self`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.matrix;
        let [a2, b2, c2, d2, e2, f2] = other.matrix;
        Self {
            matrix: [
                a1.mul_add(a2, c1 * b2),
                b1.mul_add(a2, d1 * b2),
                a1.mul_add(c2, c1 * d2),
                b1.mul_add(c2, d1 * d2),
                a1.mul_add(e2, c1.mul_add(f2, e1)),
                b1.mul_add(e2, d1.mul_add(f2, f1)),
            ],
        }
    }

    /// Map a point through the transform.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix;
        Point::new(a.mul_add(p.x, c.mul_add(p.y, e)), b.mul_add(p.x, d.mul_add(p.y, f)))
    }

    /// Map an axis-aligned rectangle. Only valid for scale/translate transforms.
    #[must_use]
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        let tl = self.apply(rect.origin());
        let br = self.apply(Point::new(rect.right(), rect.bottom()));
        Rect::new(tl.x.min(br.x), tl.y.min(br.y), (br.x - tl.x).abs(), (br.y - tl.y).abs())
    }

    /// Horizontal scale factor.
    #[must_use]
    pub const fn scale_x(&self) -> f32 {
        self.matrix[0]
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Rectangle, optionally rounded
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: f32,
        /// Fill
        fill: Fill,
    },
    /// Closed polygon
    Polygon {
        /// Vertices in order
        points: Vec<Point>,
        /// Fill
        fill: Fill,
    },
    /// Shadow cast by a polygon
    Shadow {
        /// Outline of the shape casting the shadow
        points: Vec<Point>,
        /// Shadow parameters
        shadow: Shadow,
    },
    /// Rectangle outline
    Stroke {
        /// Rectangle bounds
        bounds: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Baseline position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Bounding box of the command's geometry.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } | Self::Stroke { bounds, .. } => *bounds,
            Self::Polygon { points, .. } | Self::Shadow { points, .. } => polygon_bounds(points),
            Self::Text {
                content,
                position,
                style,
            } => Rect::new(
                position.x,
                position.y,
                content.chars().count() as f32 * style.size * 0.6,
                style.size,
            ),
        }
    }
}

fn polygon_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::default();
    };
    let (mut min, mut max) = (*first, *first);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_scale_about_keeps_pivot() {
        let pivot = Point::new(50.0, 20.0);
        let t = Transform2D::scale_about(pivot, 1.02, 1.02);
        let mapped = t.apply(pivot);
        assert!((mapped.x - pivot.x).abs() < 0.001);
        assert!((mapped.y - pivot.y).abs() < 0.001);
    }

    #[test]
    fn test_transform_apply_rect() {
        let t = Transform2D::scale_about(Point::new(50.0, 50.0), 0.5, 0.5);
        let r = t.apply_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!((r.x - 25.0).abs() < 0.001);
        assert!((r.width - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_transform_composition_order() {
        let t = Transform2D::translate(10.0, 0.0).then(&Transform2D::scale(2.0, 2.0));
        assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
    }

    #[test]
    fn test_fill_fade_and_css() {
        let fill = Fill::VerticalGradient {
            top: Color::WHITE,
            bottom: Color::BLACK,
        };
        let faded = fill.fade(0.5);
        if let Fill::VerticalGradient { top, bottom } = faded {
            assert!((top.a - 0.5).abs() < 0.001);
            assert!((bottom.a - 0.5).abs() < 0.001);
        } else {
            panic!("expected gradient");
        }
        assert!(fill.to_css().starts_with("linear-gradient(to bottom"));

        let halo = Fill::RadialGradient {
            inner: Color::WHITE,
            outer: Color::TRANSPARENT,
        };
        assert!(halo.to_css().starts_with("radial-gradient(circle"));
    }

    #[test]
    fn test_shadow_lerp_endpoints() {
        let off = Shadow {
            color: Color::BLACK.with_alpha(0.3),
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 15.0,
        };
        let on = Shadow::glow(Color::WHITE, 30.0);
        assert_eq!(off.lerp(&on, 0.0), off);
        assert_eq!(off.lerp(&on, 1.0).blur, 30.0);
    }

    #[test]
    fn test_polygon_bounds() {
        let cmd = DrawCommand::Polygon {
            points: vec![
                Point::new(8.0, 0.0),
                Point::new(92.0, 0.0),
                Point::new(88.0, 40.0),
                Point::new(12.0, 40.0),
            ],
            fill: Fill::Solid(Color::WHITE),
        };
        assert_eq!(cmd.bounds(), Rect::new(8.0, 0.0, 84.0, 40.0));
    }
}
