//! `SwarmOutputObserver<W>`: bridges `SwarmObserver` to a `FrameWriter`.

use sw_core::{Step, SwarmParams};
use sw_sim::{Frame, RunOutcome, SwarmObserver};

use crate::row::{PositionRow, StepSummaryRow};
use crate::writer::FrameWriter;
use crate::{FrameStats, OutputError, OutputResult};

/// A [`SwarmObserver`] that writes positions and a summary row for every
/// emitted frame to any [`FrameWriter`] backend.
///
/// Errors from the writer are stored internally because `SwarmObserver`
/// methods have no return value.  After `swarm.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SwarmOutputObserver<W: FrameWriter> {
    writer:     W,
    threshold:  f64,
    frames:     usize,
    last_error: Option<OutputError>,
}

impl<W: FrameWriter> SwarmOutputObserver<W> {
    /// Create an observer backed by `writer`; `params` supplies the
    /// closeness threshold used for summary rows.
    pub fn new(writer: W, params: &SwarmParams) -> Self {
        Self {
            writer,
            threshold:  params.closeness_threshold,
            frames:     0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `swarm.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Frames handed to the writer so far.
    pub fn frames_written(&self) -> usize {
        self.frames
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: FrameWriter> SwarmObserver for SwarmOutputObserver<W> {
    fn on_frame(&mut self, step: Step, frame: &Frame<'_>) {
        let rows: Vec<PositionRow> = frame
            .positions
            .iter()
            .zip(frame.targets)
            .enumerate()
            .map(|(i, (p, t))| PositionRow {
                step:     step.0,
                agent_id: i as u32,
                x:        p.x,
                y:        p.y,
                target_x: t.x,
                target_y: t.y,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }

        let stats = FrameStats::from_frame(frame, self.threshold);
        let summary = StepSummaryRow {
            step:             step.0,
            converged:        frame.converged,
            converged_agents: stats.converged_agents as u64,
            mean_distance:    stats.mean_distance,
            max_distance:     stats.max_distance,
        };
        let result = self.writer.write_step_summary(&summary);
        self.store_err(result);
        self.frames += 1;
    }

    fn on_run_end(&mut self, _outcome: RunOutcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
