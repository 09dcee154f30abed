//! Sentence layout: per-word glyph points shifted into one target set.
//!
//! ```text
//! x_offset(0)   = left_padding
//! x_offset(k+1) = x_offset(k) + max_x(word k) + letter_spacing
//! ```
//!
//! Words are split on single spaces, so a run of spaces produces empty words;
//! each contributes zero points and `max_x = 0`, widening the gap by one
//! `letter_spacing`.

use std::collections::HashSet;

use sw_core::GridPoint;
use tracing::debug;

use crate::{GlyphSource, TargetSet};

/// Horizontal spacing rules for [`SentenceLayout::lay_out`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentenceLayout {
    /// Gap added after each word's rightmost point.
    pub letter_spacing: i32,
    /// Offset of the first word.
    pub left_padding: i32,
}

impl Default for SentenceLayout {
    fn default() -> Self {
        Self {
            letter_spacing: 7,
            left_padding:   15,
        }
    }
}

/// Result of laying out a sentence.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOut {
    pub targets: TargetSet,
    /// Final running offset; the right edge renderers size their canvas to.
    pub width: i32,
    /// Number of words the sentence was split into (empty words included).
    pub words: usize,
}

impl SentenceLayout {
    /// Lay out `sentence` using `source` for the per-word glyph points.
    pub fn lay_out<G: GlyphSource + ?Sized>(&self, source: &G, sentence: &str) -> LaidOut {
        let mut seen: HashSet<GridPoint> = HashSet::new();
        let mut points: Vec<GridPoint> = Vec::new();
        let mut x_offset = self.left_padding;
        let mut words = 0;

        for word in sentence.split(' ') {
            words += 1;
            let word_points = source.glyph_points(word);
            let max_x = word_points.iter().map(|p| p.x).max().unwrap_or(0);

            for p in word_points {
                let shifted = p.offset_x(x_offset);
                if seen.insert(shifted) {
                    points.push(shifted);
                }
            }
            x_offset += max_x + self.letter_spacing;
        }

        debug!(words, points = points.len(), width = x_offset, "sentence laid out");

        LaidOut {
            targets: TargetSet::from_grid(&points),
            width:   x_offset,
            words,
        }
    }
}
