//! The `GlyphSource` trait and the built-in bitmap implementation.

use std::collections::HashSet;

use sw_core::GridPoint;
use tracing::warn;

use crate::font::{self, BLANK_WIDTH};

/// Produces word-relative lattice points outlining the glyphs of one word.
///
/// `x` grows to the right and `y` downward, with the origin at the top-left
/// cell of the first glyph.  Implementations should return points in a
/// stable order without duplicates; an empty word yields an empty `Vec`.
pub trait GlyphSource {
    fn glyph_points(&self, word: &str) -> Vec<GridPoint>;
}

/// Dot-matrix font renderer.
///
/// Every lit cell becomes a `cell_size × cell_size` block of points, and
/// successive glyphs are separated by `glyph_gap` dark cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    pub cell_size: u32,
    pub glyph_gap: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self { cell_size: 1, glyph_gap: 1 }
    }
}

impl BitmapFont {
    pub fn new(cell_size: u32, glyph_gap: u32) -> Self {
        Self { cell_size: cell_size.max(1), glyph_gap }
    }

    /// Height of one rendered line in lattice units.
    pub fn line_height(&self) -> i32 {
        font::GLYPH_HEIGHT as i32 * self.cell_size as i32
    }
}

impl GlyphSource for BitmapFont {
    fn glyph_points(&self, word: &str) -> Vec<GridPoint> {
        let cell = self.cell_size.max(1) as i32;
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        let mut cursor = 0i32;

        for c in word.chars() {
            let Some(rows) = font::glyph(c) else {
                if !c.is_whitespace() {
                    warn!(character = %c, "no glyph for character; rendering as blank");
                }
                cursor += (BLANK_WIDTH as i32 + self.glyph_gap as i32) * cell;
                continue;
            };

            let width = rows[0].len() as i32;
            for (row, line) in rows.iter().enumerate() {
                for (col, _) in line.bytes().enumerate().filter(|(_, b)| *b == b'#') {
                    let x0 = cursor + col as i32 * cell;
                    let y0 = row as i32 * cell;
                    for dy in 0..cell {
                        for dx in 0..cell {
                            let p = GridPoint::new(x0 + dx, y0 + dy);
                            if seen.insert(p) {
                                points.push(p);
                            }
                        }
                    }
                }
            }
            cursor += (width + self.glyph_gap as i32) * cell;
        }

        points
    }
}
