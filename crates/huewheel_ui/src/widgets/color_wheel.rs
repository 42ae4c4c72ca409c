//! Circular hue/saturation wheel.
//!
//! The wheel owns the current HSV color. A left press (or touch) inside the
//! circle starts a drag and samples immediately, moves re-sample while the
//! drag lasts, and release or cursor-leave ends it. Presses outside the
//! circle are ignored and leave the color untouched.

use std::cell::RefCell;

use crate::callback::Callback;
use crate::color::{ColorChange, Hsv};
use crate::constants::{DEFAULT_BRIGHTNESS, DEFAULT_WHEEL_SIZE, MIN_WHEEL_SIZE};
use crate::event::Event;
use crate::layout::{Bounds, Point, Size};
use crate::raster::{self, Canvas};
use crate::sampler;
use crate::state::DragState;
use crate::widget::{EventResult, Widget};

/// Last rasterized wheel background.
///
/// The background only depends on the pixel size and brightness; the
/// selected hue/saturation only moves the marker.
#[derive(Debug)]
struct RasterCache {
    size: u32,
    brightness_bits: u32,
    image: Canvas,
}

/// A hue/saturation wheel widget
pub struct ColorWheel<M> {
    /// Requested diameter; layout may shrink it to the available width
    size: f32,
    /// Current color
    hsv: Hsv,
    /// Drag interaction state
    drag: DragState,
    /// Callback when the color changes
    on_change: Callback<ColorChange, M>,
    raster: RefCell<Option<RasterCache>>,
}

impl<M> ColorWheel<M> {
    /// Create a new wheel with the default size, showing white.
    pub fn new() -> Self {
        Self {
            size: DEFAULT_WHEEL_SIZE,
            hsv: Hsv::new(0.0, 0.0, DEFAULT_BRIGHTNESS),
            drag: DragState::Idle,
            on_change: Callback::none(),
            raster: RefCell::new(None),
        }
    }

    /// Set the requested diameter in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(MIN_WHEEL_SIZE);
        self
    }

    /// Set the initial color
    pub fn hsv(mut self, hsv: Hsv) -> Self {
        self.hsv = hsv;
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
        self.hsv
    }

    /// Current color in every display form.
    pub fn color(&self) -> ColorChange {
        ColorChange::from_hsv(self.hsv)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Replace the color without emitting a change.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = hsv;
    }

    /// Apply a new brightness (0-100) and return the resulting color.
    pub fn set_brightness(&mut self, value: f32) -> Hsv {
        self.hsv = self.hsv.with_value(value);
        self.hsv
    }

    /// Handle a primary press at `point` on a wheel drawn in `bounds`.
    ///
    /// Returns the new color, or `None` when the press is outside the circle.
    pub fn press(&mut self, point: Point, bounds: Bounds) -> Option<Hsv> {
        let sample = sampler::sample_press(point, bounds)?;
        self.drag.start_drag();
        self.hsv = self
            .hsv
            .with_hue_saturation(sample.hue(), sample.saturation());
        log::debug!("ColorWheel: started dragging, hsv={:?}", self.hsv);
        Some(self.hsv)
    }

    /// Re-sample while dragging. Positions past the rim clamp to it.
    pub fn drag_to(&mut self, point: Point, bounds: Bounds) -> Option<Hsv> {
        if !self.drag.is_dragging() {
            return None;
        }
        let sample = sampler::sample_drag(point, bounds);
        self.hsv = self
            .hsv
            .with_hue_saturation(sample.hue(), sample.saturation());
        Some(self.hsv)
    }

    /// End any drag. Returns whether a drag was active.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.drag.is_dragging();
        if was_dragging {
            log::debug!("ColorWheel: stopped dragging");
        }
        self.drag.stop_drag();
        was_dragging
    }

    /// Rasterize the wheel with its marker at `size` x `size` pixels.
    pub fn render(&self, size: u32) -> Canvas {
        let brightness_bits = self.hsv.v.to_bits();
        let mut cache = self.raster.borrow_mut();
        let stale = !matches!(
            cache.as_ref(),
            Some(c) if c.size == size && c.brightness_bits == brightness_bits
        );
        if stale {
            log::trace!("ColorWheel: rasterizing {size}px at v={}", self.hsv.v);
            *cache = Some(RasterCache {
                size,
                brightness_bits,
                image: raster::rasterize_wheel(size, self.hsv.v),
            });
        }

        let mut canvas = match cache.as_ref() {
            Some(c) => c.image.clone(),
            None => Canvas::new(size, size),
        };
        let half = size as f32 / 2.0;
        raster::draw_marker(&mut canvas, self.hsv, Point::new(half, half), half);
        canvas
    }

    /// Whether the background raster for `size` is already cached.
    pub fn is_raster_cached(&self, size: u32) -> bool {
        self.raster
            .borrow()
            .as_ref()
            .is_some_and(|c| c.size == size && c.brightness_bits == self.hsv.v.to_bits())
    }
}

impl<M> Default for ColorWheel<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel diameter of a wheel laid out in `bounds`.
pub(crate) fn pixel_size(bounds: Bounds) -> u32 {
    bounds.width.min(bounds.height).max(0.0).round() as u32
}

impl<M> Widget<M> for ColorWheel<M> {
    fn layout(&mut self, available: Size) -> Size {
        // The viewport wins over the minimum size
        let side = self.size.min(available.width).max(0.0);
        Size::new(side, side)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        let size = pixel_size(bounds);
        if size == 0 {
            return;
        }
        let wheel = self.render(size);
        raster::blit(canvas, &wheel, bounds.x.round() as i32, bounds.y.round() as i32);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        if let Some(point) = event.primary_press() {
            return match self.press(point, bounds) {
                Some(hsv) => self.on_change.call(ColorChange::from_hsv(hsv)).into(),
                None => EventResult::None,
            };
        }

        if let Some(point) = event.pointer_move() {
            return match self.drag_to(point, bounds) {
                Some(hsv) => self.on_change.call(ColorChange::from_hsv(hsv)).into(),
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
