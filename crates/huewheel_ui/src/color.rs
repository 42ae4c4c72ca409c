//! Color model conversions.
//!
//! HSV is the working representation of the picker. RGB, HSL and hex strings
//! are derived from it on demand and never fed back into the wheel except
//! through [`rgb_to_hsv`] when the user types a color.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing user-typed colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not `#rgb` or `#rrggbb` (the `#` is optional)
    #[error("Invalid hex color: '{input}'")]
    InvalidHex {
        /// The rejected input, trimmed
        input: String,
    },
}

impl ColorError {
    /// Create an invalid hex error for the given input.
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Hex form, see [`rgb_to_hex`].
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }
}

/// Hue/saturation/lightness, rounded to whole units for display.
///
/// - `h`: degrees in `[0, 360)`
/// - `s`, `l`: percent in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h as f32, self.s as f32, self.l as f32)
    }
}

/// Hue/saturation/value, the picker's source of truth.
///
/// Constructed values always hold `h` in `[0, 360)` and `s`, `v` in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a normalized HSV triple. Hue wraps, saturation and value clamp.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            v: clamp_percent(v),
        }
    }

    /// Same hue and saturation at a different value.
    pub fn with_value(self, v: f32) -> Self {
        Self::new(self.h, self.s, v)
    }

    /// Same value at a different hue and saturation.
    pub fn with_hue_saturation(self, h: f32, s: f32) -> Self {
        Self::new(h, s, self.v)
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

/// The payload handed to change callbacks: every display form of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChange {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl ColorChange {
    /// Derive all display forms from the picker's HSV.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::from_rgb(hsv.to_rgb())
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
        }
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Convert a unit-range channel to 8 bits, rounding to nearest.
fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees, wrapped into 0-360
/// * `s` - Saturation percent (0-100)
/// * `v` - Value/brightness percent (0-100)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let hsv = Hsv::new(h, s, v);
    let (h, s, v) = (hsv.h, hsv.s / 100.0, hsv.v / 100.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
}

/// Hue in `[0, 1)` of a normalized RGB triple, given its max and chroma.
fn hue_fraction(r: f32, g: f32, b: f32, max: f32, d: f32) -> f32 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

/// Round a hue fraction to whole degrees, folding 360 back to 0.
fn hue_degrees(fraction: f32) -> u16 {
    ((fraction * 360.0).round() as u16) % 360
}

/// Convert RGB to HSL, rounded to whole degrees and percent.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0, 0, (l * 100.0).round() as u8);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = hue_fraction(r, g, b, max, d);

    Hsl::new(
        hue_degrees(h),
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Convert RGB to HSV. Achromatic input gets hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else {
        hue_fraction(r, g, b, max, d) * 360.0
    };

    Hsv::new(h, s * 100.0, max * 100.0)
}

/// Format RGB as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    let packed = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    format!("#{packed:06x}")
}

/// Parse `#rrggbb` or the `#rgb` shorthand. The leading `#` is optional and
/// digits are case-insensitive.
pub fn hex_to_rgb(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(trimmed));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(ColorError::invalid_hex(trimmed)),
    };

    let packed =
        u32::from_str_radix(&expanded, 16).map_err(|_| ColorError::invalid_hex(trimmed))?;
    Ok(Rgb::new(
        (packed >> 16) as u8,
        (packed >> 8) as u8,
        packed as u8,
    ))
}

/// Channel interpolation for [`hsl_to_rgb`]; `t` wraps into `[0, 1]`.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees, wrapped into 0-360
/// * `s` - Saturation percent (0-100)
/// * `l` - Lightness percent (0-100)
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = normalize_hue(h) / 360.0;
    let s = clamp_percent(s) / 100.0;
    let l = clamp_percent(l) / 100.0;

    if s == 0.0 {
        let gray = unit_to_u8(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        unit_to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        unit_to_u8(hue_to_channel(p, q, h)),
        unit_to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}
