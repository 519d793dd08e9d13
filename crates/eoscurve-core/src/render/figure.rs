//! Assembly of the full figure: the panel grid, the shared legend, and the
//! final write of the bitmap canvas.

use plotters::prelude::*;
use std::path::Path;

use super::RenderError;
use super::layout::{FigureGeometry, GridSpec, PANEL_ROWS};
use super::legend::{self, LegendEntry};
use super::panel::{self, PanelData};
use super::style::Scale;

/// Grid column whose bottom panel anchors the shared legend.
const LEGEND_ANCHOR_COL: usize = 1;

/// Renders all panels onto one canvas and writes it to `output`,
/// overwriting any existing file.
pub fn render(
    output: &Path,
    geometry: &FigureGeometry,
    panels: &[PanelData],
    entries: &[LegendEntry],
) -> Result<(), RenderError> {
    let canvas = geometry.pixel_size();
    let root = BitMapBackend::new(output, canvas).into_drawing_area();
    root.fill(&WHITE).map_err(RenderError::backend)?;

    let grid = GridSpec::default();
    let scale = Scale::new(geometry.dpi);

    for (index, (row, col), edges) in panel::panel_placements(panels.len()) {
        let rect = grid.panel_rect(row, col, canvas);
        let area = root.clone().shrink((rect.x, rect.y), (rect.width, rect.height));
        panel::draw_panel(&area, &panels[index], edges, scale)?;
    }

    let anchor = grid.panel_rect(PANEL_ROWS - 1, LEGEND_ANCHOR_COL, canvas);
    legend::draw_legend(&root, anchor, entries, scale)?;

    root.present().map_err(RenderError::backend)
}
