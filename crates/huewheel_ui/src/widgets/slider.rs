//! Linear brightness slider (0-100).

use image::Rgba;

use crate::callback::Callback;
use crate::color::Rgb;
use crate::constants::{
    DEFAULT_BRIGHTNESS, SLIDER_HEIGHT, SLIDER_HIT_SLOP, SLIDER_THUMB_SIZE, SLIDER_TRACK_HEIGHT,
};
use crate::event::Event;
use crate::layout::{Bounds, Point, Size};
use crate::raster::{self, Canvas};
use crate::state::DragState;
use crate::widget::{EventResult, Widget};

const MIN: f32 = 0.0;
const MAX: f32 = 100.0;

/// A slider that supplies the value/brightness channel.
pub struct BrightnessSlider<M> {
    /// Current value
    value: f32,
    /// Step size (0 for continuous)
    step: f32,
    /// Color at full brightness, used for the track gradient
    tint: Rgb,
    /// Drag interaction state
    drag: DragState,
    /// Callback when value changes
    on_change: Callback<f32, M>,
}

impl<M> BrightnessSlider<M> {
    /// Create a new slider at the default brightness.
    pub fn new() -> Self {
        Self {
            value: DEFAULT_BRIGHTNESS,
            step: 0.0,
            tint: Rgb::WHITE,
            drag: DragState::Idle,
            on_change: Callback::none(),
        }
    }

    /// Set the current value
    pub fn value(mut self, value: f32) -> Self {
        self.value = value.clamp(MIN, MAX);
        self
    }

    /// Set the step size (0 for continuous).
    pub fn step(mut self, step: f32) -> Self {
        self.step = step.max(0.0);
        self
    }

    /// Set the callback when value changes.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> M + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    pub fn current(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(MIN, MAX);
    }

    /// Set the full-brightness color shown at the right end of the track.
    pub fn set_tint(&mut self, tint: Rgb) {
        self.tint = tint;
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Track rectangle inside the widget bounds.
    fn track_bounds(bounds: Bounds) -> Bounds {
        Bounds::new(
            bounds.x + SLIDER_THUMB_SIZE / 2.0,
            bounds.y + (bounds.height - SLIDER_TRACK_HEIGHT) / 2.0,
            (bounds.width - SLIDER_THUMB_SIZE).max(0.0),
            SLIDER_TRACK_HEIGHT,
        )
    }

    /// Convert x position to value.
    fn x_to_value(&self, x: f32, bounds: Bounds) -> f32 {
        let track = Self::track_bounds(bounds);
        let ratio = if track.width > 0.0 {
            ((x - track.x) / track.width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let value = MIN + ratio * (MAX - MIN);

        if self.step > 0.0 {
            let steps = ((value - MIN) / self.step).round();
            (MIN + steps * self.step).clamp(MIN, MAX)
        } else {
            value
        }
    }

    /// Get the normalized position (0-1) of the current value.
    fn value_ratio(&self) -> f32 {
        (self.value - MIN) / (MAX - MIN)
    }

    /// Whether `point` is on the slider, with some slop around it.
    pub fn hit_test(point: Point, bounds: Bounds) -> bool {
        let expanded = Bounds::new(
            bounds.x - SLIDER_HIT_SLOP,
            bounds.y - SLIDER_HIT_SLOP,
            bounds.width + SLIDER_HIT_SLOP * 2.0,
            bounds.height + SLIDER_HIT_SLOP * 2.0,
        );
        expanded.contains(point)
    }

    /// Handle a primary press. Returns the new value when it lands on the slider.
    pub fn press(&mut self, point: Point, bounds: Bounds) -> Option<f32> {
        if !Self::hit_test(point, bounds) {
            return None;
        }
        self.drag.start_drag();
        self.value = self.x_to_value(point.x, bounds);
        log::debug!("BrightnessSlider: started dragging, value={}", self.value);
        Some(self.value)
    }

    /// Update the value while dragging.
    pub fn drag_to(&mut self, point: Point, bounds: Bounds) -> Option<f32> {
        if !self.drag.is_dragging() {
            return None;
        }
        self.value = self.x_to_value(point.x, bounds);
        Some(self.value)
    }

    /// End any drag. Returns whether a drag was active.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.drag.is_dragging();
        self.drag.stop_drag();
        was_dragging
    }
}

impl<M> Default for BrightnessSlider<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Widget<M> for BrightnessSlider<M> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(available.width, SLIDER_HEIGHT)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        let track = Self::track_bounds(bounds);
        let thumb = Point::new(
            track.x + self.value_ratio() * track.width,
            bounds.y + bounds.height / 2.0,
        );
        let radius = SLIDER_THUMB_SIZE / 2.0;

        raster::paint(canvas, |pixmap| {
            // Black to full brightness
            let gradient =
                raster::horizontal_gradient(track, Rgba([0, 0, 0, 255]), raster::rgba(self.tint));
            raster::fill_rect(pixmap, track, &gradient);

            raster::fill_circle(pixmap, thumb, radius, Rgba([255, 255, 255, 255]));
            raster::stroke_circle(pixmap, thumb, radius, 1.0, Rgba([0, 0, 0, 120]));
        });
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        if let Some(point) = event.primary_press() {
            return match self.press(point, bounds) {
                Some(value) => self.on_change.call(value).into(),
                None => EventResult::None,
            };
        }
        if let Some(point) = event.pointer_move() {
            return match self.drag_to(point, bounds) {
                Some(value) => self.on_change.call(value).into(),
                None => EventResult::None,
            };
        }
        if event.ends_drag() {
            self.release();
        }
        EventResult::None
    }

    fn has_active_drag(&self) -> bool {
        self.drag.is_dragging()
    }
}
