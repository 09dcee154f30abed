//! Algorithm tunables and run-loop configuration.
//!
//! Typically left at their defaults or loaded from a JSON file by the
//! application crate (with the `serde` feature enabled) and passed to the
//! swarm builder.

use crate::{SwError, SwResult};

// ── SwarmParams ───────────────────────────────────────────────────────────────

/// Scalar parameters of the per-agent update law.
///
/// ```text
/// step_size = clamp(dist² × step_gain, min_step, max_step)
/// force     = delta / (dist + epsilon) × step_size
/// velocity  = velocity × damping + force
/// ```
///
/// `Default` yields the reference constants.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwarmParams {
    /// An agent closer than this to its target counts as converged.
    pub closeness_threshold: f64,
    /// Multiplier on `dist²` before clamping.
    pub step_gain: f64,
    /// Lower clamp of the step size (minimum creep speed).
    pub min_step: f64,
    /// Maximum per-step force magnitude.
    pub max_step: f64,
    /// Weight on the previous velocity.  Must be in `[0, 1)`.
    pub damping: f64,
    /// Added to `dist` before normalising so `dist == 0` stays finite.
    pub epsilon: f64,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            closeness_threshold: 0.05,
            step_gain:           0.1,
            min_step:            0.005,
            max_step:            0.1,
            damping:             0.6,
            epsilon:             1e-5,
        }
    }
}

impl SwarmParams {
    /// Reject parameter sets that would produce degenerate math.
    pub fn validate(&self) -> SwResult<()> {
        let fields = [
            ("closeness_threshold", self.closeness_threshold),
            ("step_gain", self.step_gain),
            ("min_step", self.min_step),
            ("max_step", self.max_step),
            ("damping", self.damping),
            ("epsilon", self.epsilon),
        ];
        if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SwError::Config(format!("{name} must be finite, got {v}")));
        }
        if self.closeness_threshold <= 0.0 {
            return Err(SwError::Config(format!(
                "closeness_threshold must be positive, got {}",
                self.closeness_threshold
            )));
        }
        if self.step_gain <= 0.0 {
            return Err(SwError::Config(format!(
                "step_gain must be positive, got {}",
                self.step_gain
            )));
        }
        if self.min_step <= 0.0 || self.min_step > self.max_step {
            return Err(SwError::Config(format!(
                "step bounds must satisfy 0 < min_step <= max_step, got [{}, {}]",
                self.min_step, self.max_step
            )));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(SwError::Config(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        if self.epsilon <= 0.0 {
            return Err(SwError::Config(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Step-size law: quadratic ramp in `dist`, clamped to
    /// `[min_step, max_step]`.
    #[inline]
    pub fn step_size(&self, dist: f64) -> f64 {
        (dist * dist * self.step_gain).clamp(self.min_step, self.max_step)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Run-loop configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Seed for initial placement.  The same seed always produces identical
    /// runs.
    pub seed: u64,

    /// Safety valve for `Swarm::run`.  `None` loops until convergence.
    pub max_steps: Option<u64>,

    /// Emit a frame every N steps.  1 = every step; 0 = final frame only.
    pub frame_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed:           42,
            max_steps:      Some(100_000),
            frame_interval: 1,
        }
    }
}
