//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::raster::Canvas;

/// Outcome of handling an event.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventResult<M> {
    /// Event was ignored or produced no message
    #[default]
    None,
    /// Event produced a message for the application
    Message(M),
}

impl<M> EventResult<M> {
    /// The produced message, if any.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::None => None,
            EventResult::Message(msg) => Some(msg),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EventResult::None)
    }
}

impl<M> From<Option<M>> for EventResult<M> {
    fn from(message: Option<M>) -> Self {
        match message {
            Some(msg) => EventResult::Message(msg),
            None => EventResult::None,
        }
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget into the canvas
    fn draw(&self, canvas: &mut Canvas, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }

    /// Check if this widget is currently being dragged
    fn has_active_drag(&self) -> bool {
        false
    }
}
