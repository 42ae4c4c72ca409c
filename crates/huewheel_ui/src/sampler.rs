//! Polar sampling of a circular hue/saturation control.
//!
//! Canvas coordinates grow downwards, so hue increases clockwise from the
//! positive x axis. The rasterizer and the marker use the same mapping.

use crate::layout::{Bounds, Point};

/// A pointer position expressed in wheel terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Angle from the center in degrees, `[0, 360)`
    pub angle: f32,
    /// Distance from the center divided by the radius, clamped to `[0, 1]`
    pub radius: f32,
}

impl PointerSample {
    /// Sample an offset from the wheel center.
    ///
    /// Offsets beyond `radius` clamp to the rim. Use [`hit_test`] first when
    /// out-of-circle positions must be rejected.
    pub fn from_offset(dx: f32, dy: f32, radius: f32) -> Self {
        let distance = dx.hypot(dy);
        let mut angle = dy.atan2(dx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        // -0.0 and tiny negatives can land exactly on 360 after the shift
        if angle >= 360.0 {
            angle = 0.0;
        }
        let normalized = if radius > 0.0 {
            (distance / radius).min(1.0)
        } else {
            0.0
        };
        Self {
            angle,
            radius: normalized,
        }
    }

    /// Sample a point against a wheel given by its center and radius.
    pub fn at(point: Point, center: Point, radius: f32) -> Self {
        Self::from_offset(point.x - center.x, point.y - center.y, radius)
    }

    /// Hue in degrees.
    pub fn hue(&self) -> f32 {
        self.angle
    }

    /// Saturation percent, `[0, 100]`.
    pub fn saturation(&self) -> f32 {
        self.radius * 100.0
    }
}

/// Whether `point` lies inside or exactly on the circle.
pub fn hit_test(point: Point, center: Point, radius: f32) -> bool {
    point.distance(center) <= radius
}

/// Sample a press on a wheel drawn in `bounds`. Presses outside the circle
/// yield `None`.
pub fn sample_press(point: Point, bounds: Bounds) -> Option<PointerSample> {
    let center = bounds.center();
    let radius = bounds.inscribed_radius();
    if !hit_test(point, center, radius) {
        return None;
    }
    Some(PointerSample::at(point, center, radius))
}

/// Sample a drag on a wheel drawn in `bounds`, clamping to the rim.
pub fn sample_drag(point: Point, bounds: Bounds) -> PointerSample {
    PointerSample::at(point, bounds.center(), bounds.inscribed_radius())
}

/// Position on the wheel for a hue/saturation pair; inverse of sampling.
pub fn position_for(hue: f32, saturation: f32, center: Point, radius: f32) -> Point {
    let angle = hue.to_radians();
    let distance = (saturation / 100.0).clamp(0.0, 1.0) * radius;
    Point::new(
        center.x + distance * angle.cos(),
        center.y + distance * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> Bounds {
        Bounds::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn test_center_is_achromatic() {
        let sample = sample_press(Point::new(100.0, 100.0), wheel()).unwrap();
        assert_eq!(sample.saturation(), 0.0);
        assert_eq!(sample.hue(), 0.0);
    }

    #[test]
    fn test_rim_is_accepted_at_full_saturation() {
        let sample = sample_press(Point::new(200.0, 100.0), wheel()).unwrap();
        assert_eq!(sample.saturation(), 100.0);
        assert_eq!(sample.hue(), 0.0);
    }

    #[test]
    fn test_just_outside_rim_is_rejected() {
        assert!(sample_press(Point::new(200.01, 100.0), wheel()).is_none());
        // Bounding box corner is outside the circle
        assert!(sample_press(Point::new(2.0, 2.0), wheel()).is_none());
    }

    #[test]
    fn test_angles_are_clockwise_in_canvas_space() {
        let down = sample_drag(Point::new(100.0, 150.0), wheel());
        assert!((down.hue() - 90.0).abs() < 1e-3);
        let left = sample_drag(Point::new(50.0, 100.0), wheel());
        assert!((left.hue() - 180.0).abs() < 1e-3);
        let up = sample_drag(Point::new(100.0, 50.0), wheel());
        assert!((up.hue() - 270.0).abs() < 1e-3);
        assert!((up.saturation() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_clamps_outside_rim() {
        let sample = sample_drag(Point::new(400.0, 100.0), wheel());
        assert_eq!(sample.saturation(), 100.0);
    }

    #[test]
    fn test_negative_zero_angle_is_zero() {
        let sample = PointerSample::from_offset(10.0, -0.0, 20.0);
        assert_eq!(sample.angle, 0.0);
    }

    #[test]
    fn test_position_for_inverts_sampling() {
        let center = Point::new(100.0, 100.0);
        let p = position_for(135.0, 60.0, center, 100.0);
        let sample = PointerSample::at(p, center, 100.0);
        assert!((sample.hue() - 135.0).abs() < 1e-2);
        assert!((sample.saturation() - 60.0).abs() < 1e-2);
    }
}
