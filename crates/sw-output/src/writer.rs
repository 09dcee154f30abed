//! The `FrameWriter` trait implemented by backend writers.

use crate::{OutputResult, PositionRow, StepSummaryRow};

/// Trait implemented by output backends.
///
/// Errors surface through [`SwarmOutputObserver::take_error`][crate::SwarmOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait FrameWriter {
    /// Write a batch of agent positions.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
