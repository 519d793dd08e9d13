//! Colors and point-based sizing.
//!
//! Sizes are specified in typographic points and converted to pixels for
//! the configured resolution, so the figure keeps its proportions at any
//! dpi.

use plotters::style::RGBColor;

/// Parses a `#rrggbb` hex string. Returns `None` for anything else.
pub fn parse_hex_color(value: &str) -> Option<RGBColor> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}

/// Converts point sizes to pixels at a fixed dpi.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    dpi: u32,
}

const POINTS_PER_INCH: f64 = 72.0;

impl Scale {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Stroke width in whole pixels, never less than one.
    pub fn stroke(&self, points: f64) -> u32 {
        (points * f64::from(self.dpi) / POINTS_PER_INCH)
            .round()
            .max(1.0) as u32
    }

    /// Size in pixels for font sizes, label areas and marker radii.
    pub fn size(&self, points: f64) -> i32 {
        (points * f64::from(self.dpi) / POINTS_PER_INCH)
            .round()
            .max(1.0) as i32
    }
}

// Point sizes used throughout the figure.
pub const TITLE_PT: f64 = 12.0;
pub const AXIS_DESC_PT: f64 = 11.0;
pub const TICK_LABEL_PT: f64 = 9.0;
pub const LEGEND_PT: f64 = 10.0;
pub const INSET_TICK_LABEL_PT: f64 = 7.0;

pub const CURVE_WIDTH_PT: f64 = 1.5;
pub const INSET_CURVE_WIDTH_PT: f64 = 1.0;
pub const MARKER_RADIUS_PT: f64 = 1.8;
pub const INSET_MARKER_RADIUS_PT: f64 = 1.25;
pub const MARKER_STROKE_PT: f64 = 0.8;
pub const AXIS_STROKE_PT: f64 = 0.8;
