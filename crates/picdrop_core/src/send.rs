//! State of an in-progress simulated send.

use web_time::{Duration, Instant};

use crate::queue::{CancelToken, UploadQueue};

/// What the driver should do after a send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStep {
    /// Call `tick` again after this delay
    Scheduled(Duration),
    /// The send is over
    Finished(SendSummary),
}

impl SendStep {
    /// Whether the send is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, SendStep::Finished(_))
    }
}

/// Outcome of a finished send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSummary {
    /// Pictures transferred
    pub sent: usize,
    /// Pictures returned to the staged set because the send stopped early
    pub reverted: usize,
    /// Whether the send was cancelled
    pub cancelled: bool,
    /// Wall-clock duration of the send
    pub elapsed: Duration,
}

/// What the next tick does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Start transferring the queue head
    StartNext,
    /// Advance the transfer of the queue head
    Transfer,
}

/// Bookkeeping for one send.
#[derive(Debug)]
pub(crate) struct SendSession {
    pub queue: UploadQueue,
    pub token: CancelToken,
    pub phase: Phase,
    pub progress: u8,
    pub sent: usize,
    pub started: Instant,
}

impl SendSession {
    pub fn new(queue: UploadQueue, token: CancelToken) -> Self {
        Self {
            queue,
            token,
            phase: Phase::StartNext,
            progress: 0,
            sent: 0,
            started: Instant::now(),
        }
    }

    /// Add one step of progress, saturating at 100. Returns the new value.
    ///
    /// The step is clamped to 1-100 so every transfer completes.
    pub fn advance(&mut self, step: u8) -> u8 {
        let step = step.clamp(1, 100);
        self.progress = self.progress.saturating_add(step).min(100);
        self.progress
    }
}
