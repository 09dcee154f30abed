//! Swarm observer trait for rendering and data collection.

use sw_core::{Step, Vec2};

use crate::RunOutcome;

/// Read-only snapshot handed to observers.
///
/// `targets[i]` is the tiled target of agent `i`, so both slices always have
/// the same length.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub positions: &'a [Vec2],
    pub targets:   &'a [Vec2],
    /// Convergence flag returned by the step that produced this frame.
    pub converged: bool,
}

impl Frame<'_> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Callbacks invoked by [`Swarm::run`][crate::Swarm::run] between steps.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SwarmObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, converged: bool) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: converged={converged}");
///         }
///     }
/// }
/// ```
pub trait SwarmObserver {
    /// Called after every step.  `step` is the count of completed steps
    /// (the first step reports `Step(1)`).
    fn on_step_end(&mut self, _step: Step, _converged: bool) {}

    /// Called every `config.frame_interval` steps and always on the step
    /// that ends the run.
    fn on_frame(&mut self, _step: Step, _frame: &Frame<'_>) {}

    /// Called once when [`Swarm::run`][crate::Swarm::run] returns.
    fn on_run_end(&mut self, _outcome: RunOutcome) {}
}

/// A [`SwarmObserver`] that does nothing.
pub struct NoopObserver;

impl SwarmObserver for NoopObserver {}
