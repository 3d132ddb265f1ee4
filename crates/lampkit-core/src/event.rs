//! Input events delivered to widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Pointer coordinates are in the same space as the bounds passed to
/// `Widget::layout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of the press
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of the release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer entered the widget
    MouseEnter,
    /// Pointer left the widget
    MouseLeave,
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled by the platform
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    /// Viewport resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

impl Event {
    /// Position carried by pointer and touch events, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchEnd { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left (primary) button
    Left,
    /// Right button
    Right,
    /// Middle button
    Middle,
}

/// Identifier of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Event::MouseMove { position: p }.position(), Some(p));
        assert_eq!(
            Event::TouchEnd {
                id: TouchId(1),
                position: p
            }
            .position(),
            Some(p)
        );
        assert_eq!(Event::MouseLeave.position(), None);
        assert_eq!(Event::TouchCancel { id: TouchId(1) }.position(), None);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let e = Event::MouseDown {
            position: Point::new(1.0, 2.0),
            button: MouseButton::Left,
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
