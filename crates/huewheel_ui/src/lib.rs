//! huewheel_ui - color model conversions and an interactive HSV color wheel
//!
//! The crate is split into pure pieces (conversions, polar sampling,
//! rasterization) and widgets built on them. Widgets draw into an
//! [`image::RgbaImage`] and report changes through callbacks that produce
//! application messages.

mod callback;
pub mod color;
pub mod constants;
mod event;
mod layout;
pub mod raster;
pub mod sampler;
mod state;
mod widget;
mod widgets;

pub use callback::Callback;
pub use color::{
    hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, ColorChange,
    ColorError, Hsl, Hsv, Rgb,
};
pub use event::{Event, MouseButton};
pub use layout::{Bounds, Point, Size};
pub use raster::Canvas;
pub use sampler::PointerSample;
pub use state::{DragState, PickerDragging};
pub use widget::{EventResult, Widget};
pub use widgets::{BrightnessSlider, ColorPicker, ColorWheel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::{ColorChange, Hsl, Hsv, Rgb};
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::{BrightnessSlider, ColorPicker, ColorWheel};
}
