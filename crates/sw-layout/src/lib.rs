//! `sw-layout`: turns text into target points for the glyph-swarm
//! simulator.
//!
//! The simulator only consumes a [`TargetSet`]; how the points are produced
//! is this crate's business.  Two sources are provided:
//!
//! - [`SentenceLayout::lay_out`] with any [`GlyphSource`] (the built-in
//!   [`BitmapFont`] by default), one glyph call per space-delimited word;
//! - [`load_targets_csv`] for externally prepared `x,y` point lists.
//!
//! # Quick-start
//!
//! ```rust
//! use sw_layout::{BitmapFont, SentenceLayout};
//!
//! let laid_out = SentenceLayout::default().lay_out(&BitmapFont::default(), "HI");
//! assert!(!laid_out.targets.is_empty());
//! ```

pub mod error;
pub mod font;
pub mod glyph;
pub mod layout;
pub mod loader;
pub mod target;


pub use error::LayoutError;
pub use glyph::{BitmapFont, GlyphSource};
pub use layout::{LaidOut, SentenceLayout};
pub use loader::{load_targets_csv, load_targets_reader};
pub use target::TargetSet;
