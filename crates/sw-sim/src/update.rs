//! The per-agent update law.
//!
//! Each agent reads only its own position, velocity and target, so the order
//! agents are visited in cannot change the result.

use sw_core::{SwarmParams, Vec2};

/// Outcome of advancing one agent by one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentUpdate {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Distance to target *before* the move.
    pub distance: f64,
    /// `distance < closeness_threshold`.
    pub converged: bool,
}

/// Advance one agent:
///
/// ```text
/// delta     = target − position
/// dist      = ‖delta‖
/// step_size = clamp(dist² × gain, min_step, max_step)
/// force     = delta / (dist + ε) × step_size
/// velocity  = velocity × damping + force
/// position += velocity
/// ```
#[inline]
pub fn advance_agent(position: Vec2, velocity: Vec2, target: Vec2, params: &SwarmParams) -> AgentUpdate {
    let delta = target - position;
    let distance = delta.length();
    let converged = distance < params.closeness_threshold;

    let step_size = params.step_size(distance);
    let force = delta / (distance + params.epsilon) * step_size;

    let velocity = velocity * params.damping + force;
    AgentUpdate {
        position: position + velocity,
        velocity,
        distance,
        converged,
    }
}
