//! Error types for wjs-deploy
//!
//! Library code returns `DeployError`; the binary wraps it in `anyhow` and
//! maps it back to an exit code at the edge.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::Phase;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Exit code for usage errors (bad token, bad tag)
pub const EXIT_USAGE: i32 = 2;
/// Exit code when another deployment holds the lock (`EX_TEMPFAIL`)
pub const EXIT_LOCKED: i32 = 75;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The command token is not one of the accepted forms
    #[error("unrecognized command '{token}'")]
    UnrecognizedCommand { token: String },

    /// The release tag of `deploy-test-wjs:<tag>` failed validation
    #[error("invalid release tag '{tag}': {reason}")]
    InvalidReleaseTag { tag: String, reason: &'static str },

    /// `dispatch` was invoked without `SSH_ORIGINAL_COMMAND`
    #[error("no command given (SSH_ORIGINAL_COMMAND is not set)")]
    MissingCommand,

    /// No profile exists for this environment/target pair
    #[error("environment '{environment}' does not support target '{target}'")]
    UnsupportedTarget { environment: String, target: String },

    /// A deployment step exited non-zero
    #[error("{phase} step failed: `{command}` exited with {}", describe_code(.code))]
    StepFailure {
        phase: Phase,
        command: String,
        code: Option<i32>,
    },

    /// A deployment step could not be started at all
    #[error("failed to start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Another deployment is running against the same root
    #[error("another deployment is in progress (lock held on {path})")]
    DeployLocked { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnrecognizedCommand { .. }
            | Self::InvalidReleaseTag { .. }
            | Self::MissingCommand
            | Self::UnsupportedTarget { .. } => EXIT_USAGE,
            Self::DeployLocked { .. } => EXIT_LOCKED,
            Self::StepFailure { .. }
            | Self::SpawnFailed { .. }
            | Self::Config { .. }
            | Self::Io(_) => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "a signal".to_string(),
    }
}
