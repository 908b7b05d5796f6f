//! Per-frame metrics for the simulation runner.
//!
//! [`FrameMetrics`] captures timing and work counts for a single
//! [`advance_frame()`](crate::SimulationRunner::advance_frame) call, so a
//! presentation loop can tune `steps_per_frame` against its latency budget.

/// Timing and work counts collected during a single frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    /// Wall-clock time for the frame, in microseconds.
    pub total_us: u64,
    /// Steps completed this frame.
    pub steps: u32,
    /// Cells whose color actually changed this frame. Lower than `steps`
    /// only for single-color palettes, where repainting is a no-op.
    pub cells_painted: u32,
    /// Cumulative steps completed since the run started.
    pub total_steps: u64,
    /// Number of frames advanced so far, including this one.
    pub frame_index: u64,
}
