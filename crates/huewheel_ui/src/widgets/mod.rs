//! Widget implementations

mod color_picker;
mod color_wheel;
mod slider;

pub use color_picker::ColorPicker;
pub use color_wheel::ColorWheel;
pub use slider::BrightnessSlider;
