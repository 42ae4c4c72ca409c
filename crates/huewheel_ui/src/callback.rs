//! Optional event handlers for widgets.
//!
//! Widgets store their handlers as `Callback<T, M>` instead of spelling out
//! `Option<Box<dyn Fn(T) -> M>>` everywhere.
//!
//! ```ignore
//! use huewheel_ui::{Callback, ColorChange};
//!
//! enum Message {
//!     Picked(ColorChange),
//! }
//!
//! let on_change: Callback<ColorChange, Message> = Callback::new(Message::Picked);
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional handler.
///
/// - `T`: the value handed to the handler (a color change, a slider value)
/// - `M`: the message type the handler produces
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `None` when no handler is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_callback_yields_nothing() {
        let callback: Callback<u8, u8> = Callback::none();
        assert!(callback.is_none());
        assert_eq!(callback.call(4), None);
    }

    #[test]
    fn test_callback_maps_value() {
        let callback = Callback::new(|v: f32| format!("{v:.1}"));
        assert_eq!(callback.call(42.0).as_deref(), Some("42.0"));
    }
}
