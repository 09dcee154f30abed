//! The `Swarm` struct and its step / run loop.

use sw_agent::Population;
use sw_core::{RunConfig, Step, SwarmParams};
use tracing::{debug, trace, warn};

use crate::update::advance_agent;
use crate::{Frame, SwarmObserver};

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// How a call to [`Swarm::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The last step reported every agent within the closeness threshold.
    Converged { steps: u64 },
    /// `config.max_steps` steps ran without convergence.
    StepLimitReached { steps: u64 },
}

impl RunOutcome {
    /// Steps taken by the `run` call that produced this outcome.
    pub fn steps(self) -> u64 {
        match self {
            RunOutcome::Converged { steps } | RunOutcome::StepLimitReached { steps } => steps,
        }
    }

    pub fn is_converged(self) -> bool {
        matches!(self, RunOutcome::Converged { .. })
    }
}

// ── Swarm ─────────────────────────────────────────────────────────────────────

/// The swarm simulator.
///
/// Owns the population exclusively and has two logical states: RUNNING
/// (initial) and CONVERGED, entered the first time [`step`](Self::step)
/// reports every agent within `params.closeness_threshold`.
///
/// Create via [`SwarmBuilder`][crate::SwarmBuilder].
pub struct Swarm {
    /// Update-law tunables, validated at build time.
    pub params: SwarmParams,

    /// Run-loop configuration (seed, step limit, frame interval).
    pub config: RunConfig,

    /// Agent state (SoA arrays).
    pub population: Population,

    /// Length of the untiled target set.
    pub target_count: usize,

    pub(crate) step: Step,
    pub(crate) converged: bool,
}

impl Swarm {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance every agent by one step and return whether all of them were
    /// within the closeness threshold at the start of the step.
    pub fn step(&mut self) -> bool {
        let params = &self.params;
        let pop = &mut self.population;
        let mut all_converged = true;

        for i in 0..pop.count {
            let update = advance_agent(pop.positions[i], pop.velocities[i], pop.targets[i], params);
            all_converged &= update.converged;
            pop.positions[i] = update.position;
            pop.velocities[i] = update.velocity;
        }

        self.step = self.step.next();
        self.converged = all_converged;
        trace!(step = self.step.0, converged = all_converged, "step");
        all_converged
    }

    /// Step until convergence, or until `config.max_steps` steps have run.
    ///
    /// Calls observer hooks after every step.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SwarmObserver>(&mut self, observer: &mut O) -> RunOutcome {
        let limit = self.config.max_steps;
        let interval = self.config.frame_interval;
        let mut steps = 0u64;

        debug!(agents = self.population.count, ?limit, "run started");

        let outcome = loop {
            if limit.is_some_and(|m| steps >= m) {
                break RunOutcome::StepLimitReached { steps };
            }

            let converged = self.step();
            steps += 1;
            let now = self.step;
            observer.on_step_end(now, converged);

            let last = converged || limit.is_some_and(|m| steps >= m);
            if last || now.is_frame(interval) {
                observer.on_frame(now, &self.frame());
            }

            if converged {
                break RunOutcome::Converged { steps };
            }
        };

        match outcome {
            RunOutcome::Converged { steps } => debug!(steps, "swarm converged"),
            RunOutcome::StepLimitReached { steps } => {
                warn!(steps, remaining = self.unconverged_count(), "step limit reached before convergence")
            }
        }
        observer.on_run_end(outcome);
        outcome
    }

    /// Run exactly `n` steps, ignoring convergence and `max_steps`.
    ///
    /// Returns the flag of the last step (or the current flag if `n == 0`).
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SwarmObserver>(&mut self, n: u64, observer: &mut O) -> bool {
        for _ in 0..n {
            let converged = self.step();
            let now = self.step;
            observer.on_step_end(now, converged);
            if now.is_frame(self.config.frame_interval) {
                observer.on_frame(now, &self.frame());
            }
        }
        self.converged
    }

    /// Snapshot of positions and tiled targets for renderers.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            positions: &self.population.positions,
            targets:   &self.population.targets,
            converged: self.converged,
        }
    }

    /// Completed steps so far.
    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Flag returned by the most recent step (`false` before the first).
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// Agents currently at or beyond the closeness threshold.
    pub fn unconverged_count(&self) -> usize {
        self.population
            .ids()
            .filter(|&id| {
                self.population.distance_to_target(id) >= self.params.closeness_threshold
            })
            .count()
    }
}
