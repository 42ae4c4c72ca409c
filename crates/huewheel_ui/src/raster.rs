//! CPU rasterization into RGBA pixel buffers.
//!
//! The wheel is filled by evaluating [`pixel_color`] once per pixel. Pixels
//! are sampled at their centers so the image is symmetric about the wheel
//! center. Shapes on top of it (marker, slider) are drawn anti-aliased with
//! tiny-skia through [`paint`].

use image::{Rgba, RgbaImage};
use tiny_skia::{
    Color, ColorU8, FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap,
    PixmapPaint, Rect, SpreadMode, Stroke, Transform,
};

use crate::color::{Hsv, Rgb};
use crate::layout::{Bounds, Point};
use crate::sampler::{self, PointerSample};

/// Pixel buffer widgets draw into.
pub type Canvas = RgbaImage;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Outline radius of the selection marker
pub const MARKER_RADIUS: f32 = 5.0;
/// Stroke width of the selection marker
pub const MARKER_STROKE: f32 = 2.0;

/// Opaque pixel for an RGB color.
pub fn rgba(rgb: Rgb) -> Rgba<u8> {
    Rgba([rgb.r, rgb.g, rgb.b, 255])
}

/// Color of the wheel at `(x, y)`, or `None` outside the circle.
pub fn pixel_color(
    x: f32,
    y: f32,
    center: Point,
    radius: f32,
    brightness: f32,
) -> Option<Rgba<u8>> {
    let point = Point::new(x, y);
    if !sampler::hit_test(point, center, radius) {
        return None;
    }
    let sample = PointerSample::at(point, center, radius);
    let hsv = Hsv::new(sample.hue(), sample.saturation(), brightness);
    Some(rgba(hsv.to_rgb()))
}

/// Rasterize a `size` x `size` wheel at the given brightness (0-100).
/// Pixels outside the circle are transparent.
pub fn rasterize_wheel(size: u32, brightness: f32) -> Canvas {
    let mut canvas = Canvas::new(size, size);
    let half = size as f32 / 2.0;
    let center = Point::new(half, half);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        *pixel = pixel_color(x as f32 + 0.5, y as f32 + 0.5, center, half, brightness)
            .unwrap_or(TRANSPARENT);
    }
    canvas
}

/// Draw the selection marker for `hsv` on a wheel with the given geometry.
pub fn draw_marker(canvas: &mut Canvas, hsv: Hsv, center: Point, radius: f32) {
    let at = sampler::position_for(hsv.h, hsv.s, center, radius);
    paint(canvas, |pixmap| {
        // Dark halo first so the white ring stays visible on light colors
        let halo = Rgba([0, 0, 0, 160]);
        stroke_circle(pixmap, at, MARKER_RADIUS + 1.0, MARKER_STROKE, halo);
        stroke_circle(
            pixmap,
            at,
            MARKER_RADIUS,
            MARKER_STROKE,
            Rgba([255, 255, 255, 255]),
        );
    });
}

/// Run `draw` on an anti-aliased pixmap holding a copy of `canvas`, then
/// write the result back.
///
/// tiny-skia works on premultiplied pixels while the canvas stores straight
/// alpha, so the copy converts both ways.
pub fn paint<F>(canvas: &mut Canvas, draw: F)
where
    F: FnOnce(&mut Pixmap),
{
    let Some(mut pixmap) = to_pixmap(canvas) else {
        return;
    };
    draw(&mut pixmap);
    for (dst, src) in canvas.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
}

/// Premultiplied copy of `canvas`. `None` for an empty canvas.
fn to_pixmap(canvas: &Canvas) -> Option<Pixmap> {
    let (width, height) = canvas.dimensions();
    let mut pixmap = Pixmap::new(width, height)?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(canvas.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

fn solid(color: Rgba<u8>) -> Paint<'static> {
    let [r, g, b, a] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Fill an axis-aligned rectangle with `paint`. Empty rectangles are skipped.
pub fn fill_rect(pixmap: &mut Pixmap, bounds: Bounds, paint: &Paint<'_>) {
    if let Some(rect) = Rect::from_xywh(bounds.x, bounds.y, bounds.width, bounds.height) {
        pixmap.fill_rect(rect, paint, Transform::identity(), None);
    }
}

/// Horizontal gradient from `from` at the left edge to `to` at the right.
pub fn horizontal_gradient(bounds: Bounds, from: Rgba<u8>, to: Rgba<u8>) -> Paint<'static> {
    let stop = |offset: f32, color: Rgba<u8>| {
        let [r, g, b, a] = color.0;
        GradientStop::new(offset, Color::from_rgba8(r, g, b, a))
    };
    let shader = LinearGradient::new(
        tiny_skia::Point::from_xy(bounds.x, bounds.y),
        tiny_skia::Point::from_xy(bounds.x + bounds.width, bounds.y),
        vec![stop(0.0, from), stop(1.0, to)],
        SpreadMode::Pad,
        Transform::identity(),
    );
    match shader {
        Some(shader) => Paint {
            shader,
            anti_alias: true,
            ..Paint::default()
        },
        // Degenerate width: nothing to interpolate
        None => solid(to),
    }
}

/// Fill a disc.
pub fn fill_circle(pixmap: &mut Pixmap, center: Point, radius: f32, color: Rgba<u8>) {
    if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
        pixmap.fill_path(
            &path,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

/// Stroke a circle outline of the given width, centered on `radius`.
pub fn stroke_circle(
    pixmap: &mut Pixmap,
    center: Point,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }
}

/// Composite `src` onto `canvas` with its top-left corner at `(x, y)`.
/// Parts falling outside the canvas are clipped.
pub fn blit(canvas: &mut Canvas, src: &Canvas, x: i32, y: i32) {
    let Some(src) = to_pixmap(src) else {
        return;
    };
    paint(canvas, |pixmap| {
        pixmap.draw_pixmap(
            x,
            y,
            src.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_outside_circle_is_none() {
        let center = Point::new(50.0, 50.0);
        assert!(pixel_color(0.5, 0.5, center, 50.0, 100.0).is_none());
        assert!(pixel_color(50.0, 50.0, center, 50.0, 100.0).is_some());
    }

    #[test]
    fn test_pixel_at_center_is_gray_at_brightness() {
        let center = Point::new(50.0, 50.0);
        let expected = (40.0_f32 / 100.0 * 255.0).round() as u8;
        assert_eq!(
            pixel_color(50.0, 50.0, center, 50.0, 40.0),
            Some(Rgba([expected, expected, expected, 255]))
        );
    }

    #[test]
    fn test_pixel_on_positive_x_axis_is_red() {
        let center = Point::new(50.0, 50.0);
        assert_eq!(
            pixel_color(100.0, 50.0, center, 50.0, 100.0),
            Some(Rgba([255, 0, 0, 255]))
        );
    }

    #[test]
    fn test_rasterized_wheel_masks_corners() {
        let wheel = rasterize_wheel(64, 100.0);
        assert_eq!(wheel.dimensions(), (64, 64));
        assert_eq!(*wheel.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*wheel.get_pixel(63, 63), TRANSPARENT);
        assert_eq!(wheel.get_pixel(32, 32)[3], 255);
        // Right edge midpoint is close to pure red
        let rim = wheel.get_pixel(63, 32);
        assert_eq!(rim[3], 255);
        assert!(rim[0] > 240 && rim[2] < 40, "{rim:?}");
    }

    #[test]
    fn test_zero_brightness_wheel_is_black() {
        let wheel = rasterize_wheel(16, 0.0);
        for pixel in wheel.pixels().filter(|p| p[3] == 255) {
            assert_eq!(*pixel, Rgba([0, 0, 0, 255]));
        }
    }

    #[test]
    fn test_marker_is_drawn_at_selection() {
        let mut wheel = rasterize_wheel(100, 100.0);
        let under = *wheel.get_pixel(79, 50);
        let center = Point::new(50.0, 50.0);
        draw_marker(&mut wheel, Hsv::new(0.0, 50.0, 100.0), center, 50.0);
        // The white ring covers radii 4..6 around (75, 50)
        let ring = wheel.get_pixel(79, 50);
        assert!(under[1] < 150, "{under:?}");
        assert!(ring[1] > 230 && ring[2] > 230, "{ring:?}");
        // Marker center is left untouched
        assert_ne!(*wheel.get_pixel(75, 50), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_marker_edges_are_anti_aliased() {
        let mut canvas = Canvas::from_pixel(40, 40, Rgba([0, 0, 255, 255]));
        paint(&mut canvas, |pixmap| {
            stroke_circle(pixmap, Point::new(20.0, 20.0), 10.0, 2.0, Rgba([255, 0, 0, 255]));
        });
        // Some pixels along the curve are a mix of ring and background
        let blended = canvas
            .pixels()
            .filter(|p| p[0] > 20 && p[0] < 235 && p[2] > 20)
            .count();
        assert!(blended > 0);
        assert_eq!(*canvas.get_pixel(20, 20), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(4, 4);
        paint(&mut canvas, |pixmap| {
            let bounds = Bounds::new(-2.0, 2.0, 10.0, 10.0);
            fill_rect(pixmap, bounds, &solid(Rgba([9, 9, 9, 255])));
        });
        assert_eq!(*canvas.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(canvas.get_pixel(3, 3)[3], 255);
        assert!(canvas.get_pixel(3, 3)[0].abs_diff(9) <= 1);
    }

    #[test]
    fn test_gradient_runs_between_stops() {
        let mut canvas = Canvas::new(100, 2);
        let bounds = Bounds::new(0.0, 0.0, 100.0, 2.0);
        paint(&mut canvas, |pixmap| {
            let gradient =
                horizontal_gradient(bounds, Rgba([0, 0, 0, 255]), Rgba([0, 0, 255, 255]));
            fill_rect(pixmap, bounds, &gradient);
        });
        let left = canvas.get_pixel(0, 1);
        let right = canvas.get_pixel(99, 1);
        assert!(left[2] < 5, "{left:?}");
        assert!(right[2] > 250, "{right:?}");
        assert_eq!(right[3], 255);
    }

    #[test]
    fn test_paint_on_empty_canvas_is_a_no_op() {
        let mut canvas = Canvas::new(0, 0);
        paint(&mut canvas, |_| panic!("nothing to draw on"));
    }

    #[test]
    fn test_blit_skips_transparent_and_clips() {
        let mut canvas = Canvas::from_pixel(3, 3, Rgba([1, 2, 3, 255]));
        let mut src = Canvas::new(2, 2);
        src.put_pixel(1, 1, Rgba([200, 0, 0, 255]));
        blit(&mut canvas, &src, 1, 1);
        blit(&mut canvas, &src, 5, 5);
        blit(&mut canvas, &src, -2, -2);
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([1, 2, 3, 255]));
        assert_eq!(*canvas.get_pixel(2, 2), Rgba([200, 0, 0, 255]));
    }
}
