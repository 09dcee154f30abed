//! Planar coordinate types.
//!
//! `Vec2` is the continuous simulation space (positions, velocities, forces)
//! and uses `f64` throughout so step traces are reproducible against the
//! reference arithmetic.  `GridPoint` is the integer lattice glyph layouts
//! are produced on; it converts losslessly into `Vec2`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2D vector / point in simulation space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, s: f64) -> Vec2 {
        Vec2::new(self.x / s, self.y / s)
    }
}

impl From<GridPoint> for Vec2 {
    #[inline]
    fn from(p: GridPoint) -> Vec2 {
        Vec2::new(p.x as f64, p.y as f64)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Component-wise maximum over `points`.  `None` for an empty slice.
pub fn bounds_max(points: &[Vec2]) -> Option<Vec2> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, &p| acc.max(p)))
}

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// An integer lattice point produced by glyph layout.  `x` grows to the
/// right, `y` grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift right by `dx` cells.
    #[inline]
    pub fn offset_x(self, dx: i32) -> Self {
        Self::new(self.x + dx, self.y)
    }
}
