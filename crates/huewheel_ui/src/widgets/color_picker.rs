//! Color picker: a hue/saturation wheel above a brightness slider.
//!
//! The picker owns the current HSV color through its wheel and reports every
//! change through a single callback carrying the hex, RGB and HSL forms.
//! Drag samples on the wheel and brightness changes both emit; presses that
//! miss both parts do nothing.

use crate::callback::Callback;
use crate::color::{ColorChange, Hsv, Rgb};
use crate::constants::{DEFAULT_WHEEL_SIZE, MIN_WHEEL_SIZE, PICKER_SPACING, SLIDER_HEIGHT};
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::raster::Canvas;
use crate::state::PickerDragging;
use crate::widget::{EventResult, Widget};
use crate::widgets::{BrightnessSlider, ColorWheel};

/// Wheel plus brightness slider, emitting [`ColorChange`]s.
pub struct ColorPicker<M> {
    /// Requested wheel diameter
    size: f32,
    wheel: ColorWheel<M>,
    slider: BrightnessSlider<M>,
    /// Which part owns the current drag
    dragging: PickerDragging,
    /// Callback when the color changes
    on_change: Callback<ColorChange, M>,
}

impl<M> ColorPicker<M> {
    /// Create a new picker with the default size, showing white.
    pub fn new() -> Self {
        let wheel = ColorWheel::new();
        let mut slider = BrightnessSlider::new().value(wheel.current().v);
        slider.set_tint(full_brightness(wheel.current()));
        Self {
            size: DEFAULT_WHEEL_SIZE,
            wheel,
            slider,
            dragging: PickerDragging::None,
            on_change: Callback::none(),
        }
    }

    /// Set the requested wheel diameter in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(MIN_WHEEL_SIZE);
        self.wheel = self.wheel.size(self.size);
        self
    }

    /// Set the initial color
    pub fn hsv(mut self, hsv: Hsv) -> Self {
        self.set_hsv(hsv);
        self
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(ColorChange) -> M + 'static,
    {
        self.on_change = Callback::new(handler);
        self
    }

    /// Current color.
    pub fn current(&self) -> Hsv {
        self.wheel.current()
    }

    /// Current color in every display form.
    pub fn color(&self) -> ColorChange {
        self.wheel.color()
    }

    pub fn dragging(&self) -> PickerDragging {
        self.dragging
    }

    /// Replace the color without emitting a change.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.wheel.set_hsv(hsv);
        self.slider.set_value(hsv.v);
        self.slider.set_tint(full_brightness(hsv));
    }

    /// Re-seed the picker from an RGB color, e.g. typed hex input.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.set_hsv(rgb.to_hsv());
    }

    /// Apply a brightness (0-100) as if the slider moved. Emits a change.
    pub fn set_brightness(&mut self, value: f32) -> Option<M> {
        self.slider.set_value(value);
        let hsv = self.wheel.set_brightness(self.slider.current());
        log::debug!("ColorPicker: brightness {}", hsv.v);
        self.emit(hsv)
    }

    /// Diameter of the wheel after layout clamps it to `available_width`.
    pub fn wheel_side(&self, available_width: f32) -> f32 {
        self.size.min(available_width).max(0.0)
    }

    /// Split picker bounds into wheel and slider bounds.
    pub fn part_bounds(bounds: Bounds) -> (Bounds, Bounds) {
        let side = bounds
            .width
            .min(bounds.height - PICKER_SPACING - SLIDER_HEIGHT)
            .max(0.0);
        let wheel = Bounds::new(bounds.x, bounds.y, side, side);
        let slider = Bounds::new(
            bounds.x,
            bounds.y + side + PICKER_SPACING,
            side,
            SLIDER_HEIGHT,
        );
        (wheel, slider)
    }

    fn emit(&mut self, hsv: Hsv) -> Option<M> {
        self.slider.set_tint(full_brightness(hsv));
        self.on_change.call(ColorChange::from_hsv(hsv))
    }

    /// Render the picker at its requested size on a transparent canvas.
    pub fn render(&mut self, available_width: f32) -> Canvas {
        let size = self.layout(Size::new(available_width, f32::INFINITY));
        let mut canvas = Canvas::new(size.width.round() as u32, size.height.round() as u32);
        self.draw(&mut canvas, Bounds::from_size(size));
        canvas
    }
}

impl<M> Default for ColorPicker<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// The hue/saturation of `hsv` at full brightness.
fn full_brightness(hsv: Hsv) -> Rgb {
    hsv.with_value(100.0).to_rgb()
}

impl<M> Widget<M> for ColorPicker<M> {
    fn layout(&mut self, available: Size) -> Size {
        let side = self.wheel_side(available.width);
        Size::new(side, side + PICKER_SPACING + SLIDER_HEIGHT)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        let (wheel, slider) = Self::part_bounds(bounds);
        Widget::<M>::draw(&self.wheel, canvas, wheel);
        Widget::<M>::draw(&self.slider, canvas, slider);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let (wheel_bounds, slider_bounds) = Self::part_bounds(bounds);

        if let Some(point) = event.primary_press() {
            if let Some(hsv) = self.wheel.press(point, wheel_bounds) {
                self.dragging = PickerDragging::Wheel;
                return self.emit(hsv).into();
            }
            if let Some(value) = self.slider.press(point, slider_bounds) {
                self.dragging = PickerDragging::Brightness;
                let hsv = self.wheel.set_brightness(value);
                return self.emit(hsv).into();
            }
            return EventResult::None;
        }

        if let Some(point) = event.pointer_move() {
            let hsv = match self.dragging {
                PickerDragging::Wheel => self.wheel.drag_to(point, wheel_bounds),
                PickerDragging::Brightness => self
                    .slider
                    .drag_to(point, slider_bounds)
                    .map(|value| self.wheel.set_brightness(value)),
                PickerDragging::None => None,
            };
            return match hsv {
                Some(hsv) => self.emit(hsv).into(),
                None => EventResult::None,
            };
        }

        if event.ends_drag() && self.dragging != PickerDragging::None {
            log::debug!("ColorPicker: stopped dragging {:?}", self.dragging);
            self.wheel.release();
            self.slider.release();
            self.dragging = PickerDragging::None;
        }
        EventResult::None
    }

    fn has_active_drag(&self) -> bool {
        self.dragging != PickerDragging::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseButton;
    use crate::layout::Point;

    // Wheel occupies (0, 0)-(200, 200), slider row starts at y = 212
    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 200.0, 200.0 + PICKER_SPACING + SLIDER_HEIGHT)
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    fn picker() -> ColorPicker<ColorChange> {
        ColorPicker::new().size(200.0).on_change(|change| change)
    }

    #[test]
    fn test_layout_clamps_to_viewport() {
        let mut picker = picker().size(300.0);
        let size = picker.layout(Size::new(180.0, 1000.0));
        assert_eq!(size.width, 180.0);
        assert_eq!(size.height, 180.0 + PICKER_SPACING + SLIDER_HEIGHT);

        // Narrower than the minimum wheel size still fits the viewport
        assert_eq!(picker.layout(Size::new(5.0, 1000.0)).width, 5.0);
    }

    #[test]
    fn test_wheel_press_emits_all_forms() {
        let mut picker = picker();
        let change = picker
            .on_event(&press(200.0, 100.0), bounds())
            .into_message()
            .unwrap();
        assert_eq!(change.hex, "#ff0000");
        assert_eq!(change.rgb, Rgb::new(255, 0, 0));
        assert_eq!(change.hsl, crate::color::Hsl::new(0, 100, 50));
        assert_eq!(picker.dragging(), PickerDragging::Wheel);
    }

    #[test]
    fn test_brightness_change_emits_and_keeps_hue() {
        let mut picker = picker().hsv(Hsv::new(120.0, 100.0, 100.0));
        // Slider track spans x = 8..192
        let change = picker
            .on_event(&press(100.0, 224.0), bounds())
            .into_message()
            .unwrap();
        assert_eq!(picker.dragging(), PickerDragging::Brightness);
        assert_eq!(picker.current().h, 120.0);
        assert_eq!(picker.current().v, 50.0);
        assert_eq!(change.rgb, Rgb::new(0, 128, 0));
    }

    #[test]
    fn test_set_brightness_emits() {
        let mut picker = picker().hsv(Hsv::new(0.0, 100.0, 100.0));
        let change = picker.set_brightness(0.0).unwrap();
        assert_eq!(change.hex, "#000000");
    }

    #[test]
    fn test_press_in_gap_is_ignored() {
        let mut picker = picker().hsv(Hsv::new(10.0, 20.0, 30.0));
        let before = picker.current();
        // Bounding-box corner of the wheel, above the slider slop
        assert!(picker.on_event(&press(1.0, 1.0), bounds()).is_none());
        assert_eq!(picker.current(), before);
        assert!(!picker.has_active_drag());
    }

    #[test]
    fn test_drag_routes_to_owner_until_release() {
        let mut picker = picker();
        picker.on_event(&press(100.0, 100.0), bounds());
        // Moving over the slider keeps driving the wheel
        let moved = Event::MouseMove {
            position: Point::new(100.0, 224.0),
        };
        picker.on_event(&moved, bounds());
        assert_eq!(picker.current().v, 100.0);
        assert_eq!(picker.current().s, 100.0);

        let release = Event::MouseRelease {
            button: MouseButton::Left,
            position: Point::new(100.0, 224.0),
        };
        assert!(picker.on_event(&release, bounds()).is_none());
        assert!(!picker.has_active_drag());
        assert!(picker.on_event(&moved, bounds()).is_none());
    }

    #[test]
    fn test_set_rgb_reseeds_without_emitting() {
        let mut picker = picker();
        picker.set_rgb(Rgb::new(0, 0, 255));
        assert_eq!(picker.color().hex, "#0000ff");
        assert!((picker.current().h - 240.0).abs() < 1e-3);
    }

    #[test]
    fn test_render_has_wheel_and_slider() {
        let mut picker = picker().size(64.0);
        let canvas = picker.render(500.0);
        assert_eq!(
            canvas.dimensions(),
            (64, (64.0 + PICKER_SPACING + SLIDER_HEIGHT) as u32)
        );
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(32, 20)[3], 255);
    }
}
