//! Deploy Outcome
//!
//! Result types for a completed deployment.

use std::time::Duration;

use crate::domain::entities::Phase;

/// One step that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub phase: Phase,
    pub command: String,
    pub duration: Duration,
}

/// Result of a successful deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Profile key, e.g. `prod-wjs`
    pub profile: String,
    pub steps: Vec<StepReport>,
    pub duration: Duration,
}

impl DeployOutcome {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}
