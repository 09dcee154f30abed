//! Core agent storage.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let pos = population.positions[agent.index()];  // O(1), cache-friendly
//! ```

use sw_core::{AgentId, Vec2};

/// Structure-of-Arrays storage for all agent state.
///
/// Created once at run start by [`PopulationBuilder`][crate::PopulationBuilder].
/// `positions` and `velocities` are mutated in place every step; `targets`
/// is fixed for the run.
#[derive(Clone, Debug)]
pub struct Population {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current position of each agent.
    pub positions: Vec<Vec2>,

    /// Current velocity of each agent.  Starts at zero.
    pub velocities: Vec<Vec2>,

    /// Assigned target of each agent (`targets[i mod M]` of the target set).
    pub targets: Vec<Vec2>,
}

impl Population {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all valid agent IDs in index order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec2 {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn target(&self, agent: AgentId) -> Vec2 {
        self.targets[agent.index()]
    }

    /// Euclidean distance from `agent` to its target.
    #[inline]
    pub fn distance_to_target(&self, agent: AgentId) -> f64 {
        self.position(agent).distance(self.target(agent))
    }
}
