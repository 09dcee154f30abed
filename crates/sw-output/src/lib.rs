//! `sw-output`: output and rendering collaborators for the glyph-swarm
//! simulator.
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`csv`]       | `CsvWriter` → `positions.csv`, `step_summaries.csv`        |
//! | [`observer`]  | `SwarmOutputObserver` (bridges `SwarmObserver` to writers) |
//! | [`canvas`]    | `AsciiCanvas` terminal renderer                            |
//! | [`stats`]     | `FrameStats` per-frame distance summary                    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sw_output::{CsvWriter, SwarmOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SwarmOutputObserver::new(writer, &swarm.params);
//! swarm.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod canvas;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod stats;
pub mod writer;


pub use canvas::AsciiCanvas;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SwarmOutputObserver;
pub use row::{PositionRow, StepSummaryRow};
pub use stats::FrameStats;
pub use writer::FrameWriter;
