//! `sw-agent`: Structure-of-Arrays agent population for the glyph-swarm
//! workspace.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `Population` (SoA arrays)                                 |
//! | [`builder`]     | `PopulationBuilder` (random placement + target tiling)    |
//! | [`error`]       | `PopulationError`, `PopulationResult`                     |

pub mod builder;
pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{PopulationBuilder, tile_targets};
pub use error::{PopulationError, PopulationResult};
pub use store::Population;
