//! Drawing of one panel: the main chart, its six overlaid series, and the
//! zoomed inset.

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

type PanelChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

use super::RenderError;
use super::layout::{
    self, GridSpec, INSET_ENERGY_RANGE, INSET_VOLUME_RANGE, PANEL_ENERGY_RANGE, PANEL_VOLUME_RANGE,
    PixelRect,
};
use super::style::{self, Scale};
use crate::core::models::series::EnergyVolumeSeries;

pub const VOLUME_AXIS_LABEL: &str = "Volume (Å³/SiO₂)";
pub const ENERGY_AXIS_LABEL: &str = "ΔE (meV/SiO₂)";

/// One structure's pair of series inside a panel.
#[derive(Debug, Clone)]
pub struct PanelSeries {
    pub color: RGBColor,
    /// Model-predicted curve, drawn as a continuous line.
    pub model: EnergyVolumeSeries,
    /// DFT reference points, drawn as open circles.
    pub dft: EnergyVolumeSeries,
}

/// Everything needed to draw one potential's panel.
#[derive(Debug, Clone)]
pub struct PanelData {
    pub title: String,
    pub series: Vec<PanelSeries>,
}

/// Which shared-axis edges of the grid this panel sits on. Axis
/// descriptions and tick labels are drawn only there.
#[derive(Debug, Clone, Copy)]
pub struct PanelEdges {
    pub bottom_row: bool,
    pub left_column: bool,
}

pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelData,
    edges: PanelEdges,
    scale: Scale,
) -> Result<(), RenderError> {
    draw_main_chart(area, panel, edges, scale)?;
    draw_inset(area, panel, scale)
}

fn draw_main_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelData,
    edges: PanelEdges,
    scale: Scale,
) -> Result<(), RenderError> {
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", scale.size(style::TITLE_PT)))
        .x_label_area_size(scale.size(style::TICK_LABEL_PT * 2.5))
        .y_label_area_size(scale.size(style::TICK_LABEL_PT * 4.0))
        .build_cartesian_2d(
            PANEL_VOLUME_RANGE.0..PANEL_VOLUME_RANGE.1,
            PANEL_ENERGY_RANGE.0..PANEL_ENERGY_RANGE.1,
        )
        .map_err(RenderError::backend)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .disable_y_mesh()
            .axis_style(BLACK.stroke_width(scale.stroke(style::AXIS_STROKE_PT)))
            .label_style(("sans-serif", scale.size(style::TICK_LABEL_PT)))
            .axis_desc_style(("sans-serif", scale.size(style::AXIS_DESC_PT)));

        // Axes are shared across the grid: labels only on the outer edges.
        if edges.bottom_row {
            mesh.x_desc(VOLUME_AXIS_LABEL);
        } else {
            mesh.x_labels(0);
        }
        if edges.left_column {
            mesh.y_desc(ENERGY_AXIS_LABEL);
        } else {
            mesh.y_labels(0);
        }

        mesh.draw().map_err(RenderError::backend)?;
    }

    draw_series(
        &mut chart,
        panel,
        scale.stroke(style::CURVE_WIDTH_PT),
        scale.size(style::MARKER_RADIUS_PT),
        scale.stroke(style::MARKER_STROKE_PT),
    )?;

    draw_frame(&mut chart, PANEL_VOLUME_RANGE, PANEL_ENERGY_RANGE, scale)
}

fn draw_inset<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelData,
    scale: Scale,
) -> Result<(), RenderError> {
    let (width, height) = area.dim_in_pixel();
    let rect = GridSpec::inset_rect(PixelRect {
        x: 0,
        y: 0,
        width,
        height,
    });

    let inset_area = area.clone().shrink((rect.x, rect.y), (rect.width, rect.height));
    inset_area.fill(&WHITE).map_err(RenderError::backend)?;

    let mut chart = ChartBuilder::on(&inset_area)
        .x_label_area_size(scale.size(style::INSET_TICK_LABEL_PT * 2.0))
        .y_label_area_size(scale.size(style::INSET_TICK_LABEL_PT * 3.0))
        .build_cartesian_2d(
            INSET_VOLUME_RANGE.0..INSET_VOLUME_RANGE.1,
            INSET_ENERGY_RANGE.0..INSET_ENERGY_RANGE.1,
        )
        .map_err(RenderError::backend)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(3)
        .y_labels(4)
        .axis_style(BLACK.stroke_width(scale.stroke(style::AXIS_STROKE_PT)))
        .label_style(("sans-serif", scale.size(style::INSET_TICK_LABEL_PT)))
        .draw()
        .map_err(RenderError::backend)?;

    draw_series(
        &mut chart,
        panel,
        scale.stroke(style::INSET_CURVE_WIDTH_PT),
        scale.size(style::INSET_MARKER_RADIUS_PT),
        scale.stroke(style::MARKER_STROKE_PT),
    )?;

    draw_frame(&mut chart, INSET_VOLUME_RANGE, INSET_ENERGY_RANGE, scale)
}

fn draw_series<DB: DrawingBackend>(
    chart: &mut PanelChart<'_, DB>,
    panel: &PanelData,
    curve_width: u32,
    marker_radius: i32,
    marker_stroke: u32,
) -> Result<(), RenderError> {
    for series in &panel.series {
        chart
            .draw_series(LineSeries::new(
                series.model.iter_xy(),
                series.color.stroke_width(curve_width),
            ))
            .map_err(RenderError::backend)?;

        let marker_style = ShapeStyle {
            color: series.color.to_rgba(),
            filled: false,
            stroke_width: marker_stroke,
        };
        chart
            .draw_series(
                series
                    .dft
                    .iter_xy()
                    .map(|xy| Circle::new(xy, marker_radius, marker_style)),
            )
            .map_err(RenderError::backend)?;
    }
    Ok(())
}

/// Closes the axis box on all four sides; the mesh alone only draws the
/// left and bottom spines.
fn draw_frame<DB: DrawingBackend>(
    chart: &mut PanelChart<'_, DB>,
    x_range: (f64, f64),
    y_range: (f64, f64),
    scale: Scale,
) -> Result<(), RenderError> {
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x_range.0, y_range.0), (x_range.1, y_range.1)],
            BLACK.stroke_width(scale.stroke(style::AXIS_STROKE_PT)),
        )))
        .map_err(RenderError::backend)?;
    Ok(())
}

/// Splits a list of panels across the fixed grid, pairing each panel with
/// its cell and edge flags.
pub fn panel_placements(count: usize) -> impl Iterator<Item = (usize, (usize, usize), PanelEdges)> {
    (0..count).map(|i| {
        let (row, col) = layout::panel_slot(i);
        (
            i,
            (row, col),
            PanelEdges {
                bottom_row: row == layout::PANEL_ROWS - 1,
                left_column: col == 0,
            },
        )
    })
}
