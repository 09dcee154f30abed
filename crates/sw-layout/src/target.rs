//! The immutable target set handed to the simulator.

use sw_core::{GridPoint, Vec2, bounds_max};

/// Ordered target points, one per lit glyph cell.  Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetSet {
    points: Vec<Vec2>,
}

impl TargetSet {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn from_grid(points: &[GridPoint]) -> Self {
        Self::new(points.iter().copied().map(Vec2::from).collect())
    }

    /// Number of targets, which is the recommended agent count.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Component-wise maximum of all targets.  `None` when empty.
    pub fn bounds_max(&self) -> Option<Vec2> {
        bounds_max(&self.points)
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }
}
