//! Color converter page.
//!
//! Hosts a [`ColorPicker`] and three text fields (hex, RGB, HSL). Every
//! picker change rewrites all three fields from the single change payload.
//! Editing a field parses it and re-seeds the picker; text that does not
//! parse leaves everything as it was and records an error message instead.

use huewheel_ui::prelude::*;
use huewheel_ui::{Canvas, hex_to_rgb, hsl_to_rgb};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::message::Message;

/// Format an RGB color the way the RGB field shows it.
pub fn format_rgb(rgb: Rgb) -> String {
    format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
}

/// Format an HSL color the way the HSL field shows it.
pub fn format_hsl(hsl: Hsl) -> String {
    format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
}

/// Strip an optional `name(` ... `)` wrapper, case-insensitively.
fn unwrap_function<'a>(input: &'a str, name: &str) -> &'a str {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with(name) && trimmed.ends_with(')') {
        if let Some(open) = trimmed.find('(') {
            if trimmed[..open].trim().eq_ignore_ascii_case(name) {
                return &trimmed[open + 1..trimmed.len() - 1];
            }
        }
    }
    trimmed
}

/// Split on commas and/or whitespace, dropping empty parts.
fn components(body: &str) -> Vec<&str> {
    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Parse `rgb(r, g, b)` or a bare `r, g, b` triple.
pub fn parse_rgb(input: &str) -> Result<Rgb, AppError> {
    let invalid = || AppError::invalid_input("RGB", input.trim());
    let parts = components(unwrap_function(input, "rgb"));
    let [r, g, b] = parts.as_slice() else {
        return Err(invalid());
    };
    let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

/// Parse `hsl(h, s%, l%)` or a bare `h, s, l` triple. Percent signs are
/// optional; the hue wraps, saturation and lightness must be within 0-100.
pub fn parse_hsl(input: &str) -> Result<Rgb, AppError> {
    let invalid = || AppError::invalid_input("HSL", input.trim());
    let parts = components(unwrap_function(input, "hsl"));
    let [h, s, l] = parts.as_slice() else {
        return Err(invalid());
    };
    let number = |text: &str| {
        text.trim_end_matches('%')
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(invalid)
    };
    let percent = |text: &str| {
        number(text).and_then(|v| {
            if (0.0..=100.0).contains(&v) {
                Ok(v)
            } else {
                Err(invalid())
            }
        })
    };
    Ok(hsl_to_rgb(number(*h)?, percent(*s)?, percent(*l)?))
}

/// State of the converter page.
pub struct ColorConverter {
    picker: ColorPicker<Message>,
    viewport_width: f32,
    hex: String,
    rgb: String,
    hsl: String,
    /// User-facing message for the last rejected edit
    error: Option<String>,
}

impl ColorConverter {
    /// Create a page whose picker starts at `initial`.
    pub fn new(initial: Hsv, wheel_size: f32, viewport_width: f32) -> Self {
        let picker = ColorPicker::new()
            .size(wheel_size)
            .hsv(initial)
            .on_change(Message::ColorChanged);
        let mut page = Self {
            picker,
            viewport_width,
            hex: String::new(),
            rgb: String::new(),
            hsl: String::new(),
            error: None,
        };
        page.show(&ColorChange::from_hsv(initial));
        page
    }

    /// Create a page from the user's preferences.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let prefs = &config.preferences;
        Ok(Self::new(
            prefs.initial_hsv()?,
            prefs.wheel_size,
            prefs.viewport_width,
        ))
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> &str {
        &self.rgb
    }

    pub fn hsl(&self) -> &str {
        &self.hsl
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn picker(&self) -> &ColorPicker<Message> {
        &self.picker
    }

    /// Bounds of the picker at the top-left of the page.
    pub fn picker_bounds(&mut self) -> Bounds {
        let size = self
            .picker
            .layout(Size::new(self.viewport_width, f32::INFINITY));
        Bounds::from_size(size)
    }

    /// Route a pointer event to the picker and apply what it reports.
    pub fn handle_event(&mut self, event: &Event) {
        let bounds = self.picker_bounds();
        if let Some(message) = self.picker.on_event(event, bounds).into_message() {
            self.update(message);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ColorChanged(change) => {
                self.error = None;
                self.show(&change);
            }
            Message::HexEdited(text) => {
                let parsed = hex_to_rgb(&text).map_err(AppError::from);
                self.apply_edit(parsed);
            }
            Message::RgbEdited(text) => self.apply_edit(parse_rgb(&text)),
            Message::HslEdited(text) => self.apply_edit(parse_hsl(&text)),
            Message::BrightnessSet(value) => {
                if let Some(message) = self.picker.set_brightness(value) {
                    self.update(message);
                }
            }
        }
    }

    fn apply_edit(&mut self, parsed: Result<Rgb, AppError>) {
        match parsed {
            Ok(rgb) => {
                log::debug!("Converter: re-seeding picker from {:?}", rgb);
                self.picker.set_rgb(rgb);
                self.error = None;
                self.show(&ColorChange::from_rgb(rgb));
            }
            Err(e) => {
                log::debug!("Converter: rejected edit: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn show(&mut self, change: &ColorChange) {
        self.hex = change.hex.clone();
        self.rgb = format_rgb(change.rgb);
        self.hsl = format_hsl(change.hsl);
    }

    /// Current color as the picker reports it.
    pub fn color(&self) -> ColorChange {
        self.picker.color()
    }

    /// Render the picker for the configured viewport.
    pub fn render(&mut self) -> Canvas {
        self.picker.render(self.viewport_width)
    }
}
