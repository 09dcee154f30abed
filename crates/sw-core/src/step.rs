//! Simulation step counter.
//!
//! A `Step` counts completed calls to the swarm update.  There is no mapping
//! to wall-clock time: the animation collaborator paces frames however it
//! likes.

use std::fmt;

/// Number of completed simulation steps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// `true` if this step falls on a frame boundary of `interval`.
    /// An interval of 0 never matches.
    #[inline]
    pub fn is_frame(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
