//! Application message types for huewheel.
//!
//! Picker callbacks and text-field edits are represented as messages in the
//! Elm architecture style.

use huewheel_ui::ColorChange;

/// Messages that can be sent to update the converter page.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The picker reported a new color
    ColorChanged(ColorChange),
    /// Hex text field was edited
    HexEdited(String),
    /// RGB text field was edited
    RgbEdited(String),
    /// HSL text field was edited
    HslEdited(String),
    /// Brightness set from outside the picker (e.g. keyboard)
    BrightnessSet(f32),
}
