//! Fluent builder for constructing a [`Swarm`].

use sw_agent::PopulationBuilder;
use sw_core::{RunConfig, SimRng, Step, SwarmParams, Vec2};
use tracing::debug;

use crate::{SimResult, Swarm};

/// Fluent builder for [`Swarm`].
///
/// # Required inputs
///
/// - the target set (ordered points, length M ≥ 1)
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                              |
/// |--------------------------|--------------------------------------|
/// | `.agent_count(n)`        | M (one agent per target)             |
/// | `.params(p)`             | `SwarmParams::default()`             |
/// | `.config(c)`             | `RunConfig::default()`               |
/// | `.initial_positions(v)`  | Uniform over the target bounds       |
///
/// # Example
///
/// ```rust,ignore
/// let mut swarm = SwarmBuilder::new(targets)
///     .agent_count(400)
///     .config(RunConfig { seed: 7, ..RunConfig::default() })
///     .build()?;
/// let outcome = swarm.run(&mut NoopObserver);
/// ```
pub struct SwarmBuilder {
    targets:     Vec<Vec2>,
    agent_count: Option<usize>,
    params:      SwarmParams,
    config:      RunConfig,
    positions:   Option<Vec<Vec2>>,
}

impl SwarmBuilder {
    pub fn new(targets: Vec<Vec2>) -> Self {
        Self {
            targets,
            agent_count: None,
            params:      SwarmParams::default(),
            config:      RunConfig::default(),
            positions:   None,
        }
    }

    /// Number of agents.  When it differs from the target count, targets are
    /// tiled cyclically.
    pub fn agent_count(mut self, n: usize) -> Self {
        self.agent_count = Some(n);
        self
    }

    pub fn params(mut self, params: SwarmParams) -> Self {
        self.params = params;
        self
    }

    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Supply starting positions instead of random placement (must be length
    /// `agent_count`).
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs and build, seeding placement from `config.seed`.
    pub fn build(self) -> SimResult<Swarm> {
        let mut rng = SimRng::new(self.config.seed);
        self.build_with_rng(&mut rng)
    }

    /// Validate inputs and build, drawing placement from `rng`.
    pub fn build_with_rng(self, rng: &mut SimRng) -> SimResult<Swarm> {
        self.params.validate()?;

        let count = self.agent_count.unwrap_or(self.targets.len());
        let mut builder = PopulationBuilder::new(&self.targets, count);
        if let Some(positions) = self.positions {
            builder = builder.initial_positions(positions);
        }
        let population = builder.build(rng)?;

        debug!(
            agents = population.count,
            targets = self.targets.len(),
            threshold = self.params.closeness_threshold,
            "swarm built"
        );

        Ok(Swarm {
            params:       self.params,
            config:       self.config,
            population,
            target_count: self.targets.len(),
            step:         Step::ZERO,
            converged:    false,
        })
    }
}
