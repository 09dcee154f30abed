//! `sw-core`: foundational types for the glyph-swarm workspace.
//!
//! Every other `sw-*` crate depends on this one.  It has no `sw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2`, `GridPoint`, `bounds_max`                     |
//! | [`step`]        | `Step` counter                                        |
//! | [`params`]      | `SwarmParams`, `RunConfig`                            |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `SwError`, `SwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SwError, SwResult};
pub use geo::{GridPoint, Vec2, bounds_max};
pub use ids::AgentId;
pub use params::{RunConfig, SwarmParams};
pub use rng::SimRng;
pub use step::Step;
