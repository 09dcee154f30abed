//! Fluent builder for constructing a [`Population`] from a target set.
//!
//! # Usage
//!
//! ```rust
//! use sw_agent::PopulationBuilder;
//! use sw_core::{SimRng, Vec2};
//!
//! let targets = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0)];
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(&targets, 5).build(&mut rng).unwrap();
//!
//! assert_eq!(population.count, 5);
//! assert_eq!(population.targets[3], targets[1]); // 3 mod 2
//! ```

use sw_core::{SimRng, Vec2, bounds_max};
use tracing::debug;

use crate::{Population, PopulationError, PopulationResult};

/// Fluent builder for [`Population`].
///
/// # Defaults
///
/// | Method                   | Default                                     |
/// |--------------------------|---------------------------------------------|
/// | `.initial_positions(v)`  | Uniform in `[0, max_x] × [0, max_y]`        |
pub struct PopulationBuilder<'a> {
    targets:   &'a [Vec2],
    count:     usize,
    positions: Option<Vec<Vec2>>,
}

impl<'a> PopulationBuilder<'a> {
    /// Create a builder for `count` agents drawn toward `targets`.
    pub fn new(targets: &'a [Vec2], count: usize) -> Self {
        Self {
            targets,
            count,
            positions: None,
        }
    }

    /// Supply explicit starting positions (must be length `count`).
    ///
    /// When set, the RNG passed to [`build`](Self::build) is not consumed.
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place agents, and assign tiled targets.
    ///
    /// Placement draws x then y for each agent in index order, so a given
    /// seed always yields the same population.
    pub fn build(self, rng: &mut SimRng) -> PopulationResult<Population> {
        if self.count == 0 {
            return Err(PopulationError::NoAgents);
        }
        let Some(bounds) = bounds_max(self.targets) else {
            return Err(PopulationError::EmptyTargets);
        };
        if let Some(index) = self.targets.iter().position(|t| !t.is_finite()) {
            return Err(PopulationError::NonFinite { what: "target", index });
        }

        let positions = match self.positions {
            Some(p) => {
                if p.len() != self.count {
                    return Err(PopulationError::AgentCountMismatch {
                        expected: self.count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                if let Some(index) = p.iter().position(|v| !v.is_finite()) {
                    return Err(PopulationError::NonFinite { what: "initial position", index });
                }
                p
            }
            None => (0..self.count)
                .map(|_| {
                    let x = rng.unit() * bounds.x;
                    let y = rng.unit() * bounds.y;
                    Vec2::new(x, y)
                })
                .collect(),
        };

        debug!(
            agents = self.count,
            targets = self.targets.len(),
            max_x = bounds.x,
            max_y = bounds.y,
            "population built"
        );

        Ok(Population {
            count:      self.count,
            positions,
            velocities: vec![Vec2::ZERO; self.count],
            targets:    tile_targets(self.targets, self.count),
        })
    }
}

/// Cyclically tile `targets` to length `count`: entry i is
/// `targets[i mod targets.len()]`.  Returns an empty `Vec` if `targets` is
/// empty.
pub fn tile_targets(targets: &[Vec2], count: usize) -> Vec<Vec2> {
    if targets.is_empty() {
        return Vec::new();
    }
    targets.iter().copied().cycle().take(count).collect()
}
