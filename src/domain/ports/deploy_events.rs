//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables console progress and NDJSON event streams.

use crate::domain::entities::Phase;

/// Event emitted while a plan executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Execution started
    Started { profile: String, step_count: usize },

    /// A step is about to run
    StepStarted {
        index: usize,
        phase: Phase,
        command: String,
    },

    /// A step finished successfully
    StepDone {
        index: usize,
        phase: Phase,
        duration_ms: u128,
    },

    /// A step failed; nothing after it will run
    StepFailed {
        index: usize,
        phase: Phase,
        error: String,
    },

    /// All steps succeeded
    Completed {
        profile: String,
        step_count: usize,
        duration_ms: u128,
    },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
