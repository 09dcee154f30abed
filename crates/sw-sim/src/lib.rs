//! `sw-sim`: step loop for the glyph-swarm simulator.
//!
//! # Step
//!
//! ```text
//! for each agent i (index order):
//!   delta     = target[i] − position[i];  dist = ‖delta‖
//!   converged &= dist < closeness_threshold
//!   step_size = clamp(dist² × step_gain, min_step, max_step)
//!   force     = delta / (dist + ε) × step_size
//!   velocity  = velocity × damping + force
//!   position += velocity
//! return converged
//! ```
//!
//! # Run loop
//!
//! [`Swarm::run`] steps until convergence or until `RunConfig::max_steps`
//! steps have run, handing a [`Frame`] to the observer at each frame
//! interval and on the final step.
//!
//! # Quick-start
//!
//! ```rust
//! use sw_core::Vec2;
//! use sw_sim::{NoopObserver, SwarmBuilder};
//!
//! let targets = vec![Vec2::new(20.0, 3.0), Vec2::new(22.0, 5.0)];
//! let mut swarm = SwarmBuilder::new(targets).agent_count(6).build().unwrap();
//! let outcome = swarm.run(&mut NoopObserver);
//! assert!(outcome.is_converged());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod update;


pub use builder::SwarmBuilder;
pub use error::{SimError, SimResult};
pub use observer::{Frame, NoopObserver, SwarmObserver};
pub use sim::{RunOutcome, Swarm};
pub use update::{AgentUpdate, advance_agent};
