//! Step Runner Port
//!
//! Abstracts how plan steps touch the outside world so the executor can be
//! driven by real processes or by a recording fake in tests.

use std::path::Path;

use crate::domain::entities::StepCommand;
use crate::error::DeployResult;

/// Exit information of a finished program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    pub success: bool,
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl ExitInfo {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

/// Executes the side effects of plan steps
pub trait StepRunner {
    /// Run a program to completion.
    ///
    /// Returns `Err` only when the program could not be started; a non-zero
    /// exit is reported through `ExitInfo`.
    fn exec(&self, cmd: &StepCommand) -> DeployResult<ExitInfo>;

    /// Create the file if needed and set its modification time to now
    fn touch(&self, path: &Path) -> DeployResult<()>;
}
