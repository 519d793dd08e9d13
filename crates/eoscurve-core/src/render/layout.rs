//! Fixed figure geometry.
//!
//! Every quantity here is an invariant of the figure, not derived from the
//! data: all panels share one axis window so the models stay visually
//! comparable, and the inset zoom is the same cutout on every panel.

use serde::{Deserialize, Serialize};

pub const PANEL_ROWS: usize = 2;
pub const PANEL_COLS: usize = 3;
pub const PANEL_COUNT: usize = PANEL_ROWS * PANEL_COLS;

/// Outer axis window, identical on every panel (Å³ and meV per formula unit).
pub const PANEL_VOLUME_RANGE: (f64, f64) = (20.0, 50.0);
pub const PANEL_ENERGY_RANGE: (f64, f64) = (-50.0, 700.0);

/// Zoom window of the inset axes.
pub const INSET_VOLUME_RANGE: (f64, f64) = (30.0, 50.0);
pub const INSET_ENERGY_RANGE: (f64, f64) = (-10.0, 60.0);

/// Inset position inside its parent panel, as fractions of the panel size
/// with a bottom-left origin: (x, y, width, height).
pub const INSET_FRACTION: (f64, f64, f64, f64) = (0.40, 0.35, 0.55, 0.62);

/// Grid cell occupied by the panel at `index`.
///
/// Rows and columns advance at different strides; because the grid is 2×3
/// this visits every cell exactly once over six panels.
pub fn panel_slot(index: usize) -> (usize, usize) {
    (index % PANEL_ROWS, index % PANEL_COLS)
}

/// Physical canvas size. Defaults to a print-style 17 cm × 18 cm at 600 dpi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case", default)]
pub struct FigureGeometry {
    pub width_cm: f64,
    pub height_cm: f64,
    pub dpi: u32,
}

impl Default for FigureGeometry {
    fn default() -> Self {
        Self {
            width_cm: 17.0,
            height_cm: 18.0,
            dpi: 600,
        }
    }
}

const CM_PER_INCH: f64 = 2.54;

impl FigureGeometry {
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_cm / CM_PER_INCH * f64::from(self.dpi)).round() as u32,
            (self.height_cm / CM_PER_INCH * f64::from(self.dpi)).round() as u32,
        )
    }
}

/// A rectangle in canvas pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> u32 {
        self.x + self.width / 2
    }
}

/// Fractional canvas margins and inter-panel spacing.
///
/// `left`/`right`/`bottom`/`top` are the boundaries of the panel region as
/// fractions of the canvas (measured from the left/bottom edges); `wspace`
/// and `hspace` are the gaps between panels as fractions of one panel's
/// width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            left: 0.08,
            right: 0.99,
            bottom: 0.11,
            top: 0.97,
            wspace: 0.07,
            hspace: 0.10,
        }
    }
}

impl GridSpec {
    /// Pixel rectangle of the panel at (`row`, `col`) on a canvas of the
    /// given size.
    pub fn panel_rect(&self, row: usize, col: usize, canvas: (u32, u32)) -> PixelRect {
        let (canvas_w, canvas_h) = (f64::from(canvas.0), f64::from(canvas.1));

        let avail_w = (self.right - self.left) * canvas_w;
        let avail_h = (self.top - self.bottom) * canvas_h;

        let panel_w = avail_w / (PANEL_COLS as f64 + (PANEL_COLS as f64 - 1.0) * self.wspace);
        let panel_h = avail_h / (PANEL_ROWS as f64 + (PANEL_ROWS as f64 - 1.0) * self.hspace);

        let x = self.left * canvas_w + col as f64 * panel_w * (1.0 + self.wspace);
        let y = (1.0 - self.top) * canvas_h + row as f64 * panel_h * (1.0 + self.hspace);

        PixelRect {
            x: x.round() as u32,
            y: y.round() as u32,
            width: panel_w.round() as u32,
            height: panel_h.round() as u32,
        }
    }

    /// Pixel rectangle of the inset, relative to its panel's top-left corner.
    pub fn inset_rect(panel: PixelRect) -> PixelRect {
        let (fx, fy, fw, fh) = INSET_FRACTION;
        let w = f64::from(panel.width);
        let h = f64::from(panel.height);

        // Convert the bottom-left fractional origin to top-left pixels.
        let top_fraction = 1.0 - (fy + fh);
        PixelRect {
            x: (fx * w).round() as u32,
            y: (top_fraction * h).round() as u32,
            width: (fw * w).round() as u32,
            height: (fh * h).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_windows_are_fixed() {
        assert_eq!(PANEL_VOLUME_RANGE, (20.0, 50.0));
        assert_eq!(PANEL_ENERGY_RANGE, (-50.0, 700.0));
        assert_eq!(INSET_VOLUME_RANGE, (30.0, 50.0));
        assert_eq!(INSET_ENERGY_RANGE, (-10.0, 60.0));
    }

    #[test]
    fn panel_slots_cover_the_grid_exactly_once() {
        let mut seen = [[false; PANEL_COLS]; PANEL_ROWS];
        for i in 0..PANEL_COUNT {
            let (row, col) = panel_slot(i);
            assert!(!seen[row][col], "slot ({row}, {col}) assigned twice");
            seen[row][col] = true;
        }
        assert!(seen.iter().flatten().all(|&used| used));
    }

    #[test]
    fn default_geometry_matches_print_size_at_600_dpi() {
        let (w, h) = FigureGeometry::default().pixel_size();
        // 17 cm and 18 cm at 600 dpi.
        assert_eq!(w, 4016);
        assert_eq!(h, 4252);
    }

    #[test]
    fn panel_rects_stay_inside_the_margins() {
        let grid = GridSpec::default();
        let canvas = (4016, 4252);

        for i in 0..PANEL_COUNT {
            let (row, col) = panel_slot(i);
            let rect = grid.panel_rect(row, col, canvas);
            assert!(f64::from(rect.x) >= grid.left * f64::from(canvas.0) - 1.0);
            assert!(f64::from(rect.right()) <= grid.right * f64::from(canvas.0) + 1.0);
            assert!(f64::from(rect.y) >= (1.0 - grid.top) * f64::from(canvas.1) - 1.0);
            assert!(f64::from(rect.bottom()) <= (1.0 - grid.bottom) * f64::from(canvas.1) + 1.0);
        }
    }

    #[test]
    fn adjacent_panels_do_not_overlap() {
        let grid = GridSpec::default();
        let canvas = (4016, 4252);

        let a = grid.panel_rect(0, 0, canvas);
        let b = grid.panel_rect(0, 1, canvas);
        let c = grid.panel_rect(1, 0, canvas);
        assert!(a.right() < b.x);
        assert!(a.bottom() < c.y);
    }

    #[test]
    fn inset_lands_inside_its_panel() {
        let panel = PixelRect {
            x: 100,
            y: 200,
            width: 1000,
            height: 800,
        };
        let inset = GridSpec::inset_rect(panel);
        assert!(inset.x + inset.width <= panel.width);
        assert!(inset.y + inset.height <= panel.height);
        // Bottom-left fractional origin: y = (1 - 0.35 - 0.62) * 800.
        assert_eq!(inset.y, 24);
        assert_eq!(inset.x, 400);
    }
}
