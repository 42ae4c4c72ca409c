//! Widget state types for stateful widgets

use std::fmt;

/// Pointer drag interaction state, shared by the wheel and the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// A primary press started on the widget and has not been released
    Dragging,
}

impl DragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }

    /// Start dragging
    pub fn start_drag(&mut self) {
        *self = DragState::Dragging;
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = DragState::Idle;
    }
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragState::Idle => write!(f, "idle"),
            DragState::Dragging => write!(f, "dragging"),
        }
    }
}

/// Which part of the composite picker owns the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerDragging {
    #[default]
    None,
    Wheel,
    Brightness,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_state_transitions() {
        let mut state = DragState::default();
        assert!(!state.is_dragging());
        state.start_drag();
        assert!(state.is_dragging());
        assert_eq!(state.to_string(), "dragging");
        state.stop_drag();
        assert_eq!(state, DragState::Idle);
    }
}
