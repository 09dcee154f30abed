//! Plain data row types written by output backends.

/// One agent's position at a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub step:     u64,
    pub agent_id: u32,
    pub x:        f64,
    pub y:        f64,
    pub target_x: f64,
    pub target_y: f64,
}

/// Summary statistics for one emitted frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:             u64,
    pub converged:        bool,
    pub converged_agents: u64,
    pub mean_distance:    f64,
    pub max_distance:     f64,
}
