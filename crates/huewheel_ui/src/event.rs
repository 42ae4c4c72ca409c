//! Pointer events delivered to widgets.

use crate::layout::Point;

/// Events that widgets can respond to.
///
/// Touch input is delivered as its own variants and handled like the left
/// mouse button.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePress { button: MouseButton, position: Point },
    /// Mouse button released.
    MouseRelease { button: MouseButton, position: Point },
    /// Mouse moved.
    MouseMove { position: Point },
    /// Cursor left the surface the widget is drawn on.
    CursorLeft,
    /// A touch began.
    TouchStart { position: Point },
    /// An active touch moved.
    TouchMove { position: Point },
    /// A touch ended or was cancelled.
    TouchEnd,
}

impl Event {
    /// Primary press: left mouse button or touch start.
    pub fn primary_press(&self) -> Option<Point> {
        match self {
            Event::MousePress {
                button: MouseButton::Left,
                position,
            }
            | Event::TouchStart { position } => Some(*position),
            _ => None,
        }
    }

    /// Pointer or touch movement.
    pub fn pointer_move(&self) -> Option<Point> {
        match self {
            Event::MouseMove { position } | Event::TouchMove { position } => Some(*position),
            _ => None,
        }
    }

    /// Anything that ends a primary drag.
    pub fn ends_drag(&self) -> bool {
        matches!(
            self,
            Event::MouseRelease {
                button: MouseButton::Left,
                ..
            } | Event::CursorLeft
                | Event::TouchEnd
        )
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
