//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Minimum and maximum sizes a widget may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Constraints with no upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Clamp a size into these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_constrain() {
        let c = Constraints::new(50.0, 150.0, 50.0, 150.0);
        assert_eq!(c.constrain(Size::new(100.0, 100.0)), Size::new(100.0, 100.0));
        assert_eq!(c.constrain(Size::new(10.0, 10.0)), Size::new(50.0, 50.0));
        assert_eq!(c.constrain(Size::new(200.0, 200.0)), Size::new(150.0, 150.0));
    }

    #[test]
    fn test_constraints_unbounded_keeps_size() {
        let size = Size::new(320.0, 96.0);
        assert_eq!(Constraints::unbounded().constrain(size), size);
    }

    #[test]
    fn test_constraints_tight_and_loose() {
        let tight = Constraints::tight(Size::new(10.0, 20.0));
        assert_eq!(tight.constrain(Size::new(99.0, 1.0)), Size::new(10.0, 20.0));
        let loose = Constraints::loose(Size::new(10.0, 20.0));
        assert_eq!(loose.constrain(Size::new(5.0, 99.0)), Size::new(5.0, 20.0));
    }
}
