//! The shared legend: one entry per structure, laid out in three columns
//! below the bottom-middle panel, with no border.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::RenderError;
use super::layout::PixelRect;
use super::style::{self, Scale};

/// Fraction of the anchor panel's height between its bottom edge and the
/// top of the legend block.
const ANCHOR_DROP_FRACTION: f64 = 0.12;
const LEGEND_COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: RGBColor,
}

/// Draws the legend onto the root canvas, anchored below `anchor_panel`.
///
/// Entries fill down each column first, matching the column-major order a
/// multi-column figure legend conventionally uses.
pub fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    anchor_panel: PixelRect,
    entries: &[LegendEntry],
    scale: Scale,
) -> Result<(), RenderError> {
    if entries.is_empty() {
        return Ok(());
    }

    let rows = entries.len().div_ceil(LEGEND_COLUMNS);
    let font_px = scale.size(style::LEGEND_PT);
    let row_height = font_px * 3 / 2;
    let swatch_len = font_px * 2;
    let swatch_gap = font_px / 2;
    let column_width = i32::try_from(anchor_panel.width).unwrap_or(i32::MAX) / 3;

    let total_width = column_width * LEGEND_COLUMNS as i32;
    let left = anchor_panel.center_x() as i32 - total_width / 2;
    let top =
        anchor_panel.bottom() as i32 + (ANCHOR_DROP_FRACTION * f64::from(anchor_panel.height)) as i32;

    let text_style = ("sans-serif", font_px).into_font().color(&BLACK);

    for (i, entry) in entries.iter().enumerate() {
        let col = (i / rows) as i32;
        let row = (i % rows) as i32;

        let x = left + col * column_width;
        let y = top + row * row_height;
        let mid_y = y + row_height / 2;

        root.draw(&PathElement::new(
            vec![(x, mid_y), (x + swatch_len, mid_y)],
            entry.color.stroke_width(scale.stroke(style::CURVE_WIDTH_PT)),
        ))
        .map_err(RenderError::backend)?;

        root.draw(&Text::new(
            entry.label.clone(),
            (x + swatch_len + swatch_gap, mid_y - font_px / 2),
            text_style.clone(),
        ))
        .map_err(RenderError::backend)?;
    }

    Ok(())
}
