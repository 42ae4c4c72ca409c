//! Centralized constants for huewheel_ui

// =============================================================================
// Wheel
// =============================================================================

/// Wheel diameter in pixels when the caller does not pick one
pub const DEFAULT_WHEEL_SIZE: f32 = 300.0;

/// Smallest wheel diameter a caller can request; a narrower viewport still
/// shrinks the laid-out wheel below it
pub const MIN_WHEEL_SIZE: f32 = 16.0;

/// Brightness the picker starts at (percent)
pub const DEFAULT_BRIGHTNESS: f32 = 100.0;

// =============================================================================
// Brightness slider
// =============================================================================

/// Total slider height
pub const SLIDER_HEIGHT: f32 = 24.0;

/// Height of the slider track
pub const SLIDER_TRACK_HEIGHT: f32 = 6.0;

/// Diameter of the slider thumb
pub const SLIDER_THUMB_SIZE: f32 = 16.0;

/// Extra hit area around the slider, in pixels
pub const SLIDER_HIT_SLOP: f32 = 5.0;

// =============================================================================
// Picker layout
// =============================================================================

/// Gap between the wheel and the brightness slider
pub const PICKER_SPACING: f32 = 12.0;
