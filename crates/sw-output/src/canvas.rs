//! Terminal renderer.
//!
//! Rasterises a [`Frame`] onto a character grid: `@` where at least one agent
//! sits, `.` where a target has no agent on it, space elsewhere.  Points are
//! rounded to the nearest cell, so an agent within the closeness threshold of
//! a lattice target lands on that target's cell.

use sw_core::Vec2;
use sw_sim::Frame;

const AGENT: u8 = b'@';
const TARGET: u8 = b'.';

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsciiCanvas {
    pub cols:   usize,
    pub rows:   usize,
    /// Simulation-space size mapped onto `cols × rows`.  Points in
    /// `[0, extent - 1]` land inside the grid.
    pub extent: Vec2,
}

impl AsciiCanvas {
    pub fn new(cols: usize, rows: usize, extent: Vec2) -> Self {
        Self { cols: cols.max(1), rows: rows.max(1), extent }
    }

    /// One cell per lattice unit, shrunk uniformly if `extent.x` exceeds
    /// `max_cols`.
    pub fn for_extent(extent: Vec2, max_cols: usize) -> Self {
        let scale = if extent.x > max_cols as f64 && extent.x > 0.0 {
            max_cols as f64 / extent.x
        } else {
            1.0
        };
        let cols = (extent.x * scale).ceil().max(1.0) as usize;
        let rows = (extent.y * scale).ceil().max(1.0) as usize;
        Self::new(cols, rows, extent)
    }

    /// Lattice coordinate `extent - 1` maps onto the last column/row, so the
    /// far edge survives downscaling.
    fn cell(&self, p: Vec2) -> Option<(usize, usize)> {
        let sx = axis_scale(self.cols, self.extent.x);
        let sy = axis_scale(self.rows, self.extent.y);
        let cx = (p.x * sx).round();
        let cy = (p.y * sy).round();
        if !cx.is_finite() || !cy.is_finite() || cx < 0.0 || cy < 0.0 {
            return None;
        }
        let (cx, cy) = (cx as usize, cy as usize);
        (cx < self.cols && cy < self.rows).then_some((cx, cy))
    }

    /// Render `frame` as `rows` newline-separated lines with trailing spaces
    /// trimmed.  Points outside the extent are dropped.
    pub fn render(&self, frame: &Frame<'_>) -> String {
        let mut grid = vec![vec![b' '; self.cols]; self.rows];

        for &t in frame.targets {
            if let Some((x, y)) = self.cell(t) {
                grid[y][x] = TARGET;
            }
        }
        for &p in frame.positions {
            if let Some((x, y)) = self.cell(p) {
                grid[y][x] = AGENT;
            }
        }

        grid.iter()
            .map(|row| String::from_utf8_lossy(row).trim_end().to_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn axis_scale(cells: usize, extent: f64) -> f64 {
    if extent > 1.0 {
        (cells - 1) as f64 / (extent - 1.0)
    } else {
        1.0
    }
}
