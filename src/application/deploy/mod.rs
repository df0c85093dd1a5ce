//! Deploy Module
//!
//! Runs a resolved `DeployPlan` step by step.
//!
//! ## Structure
//!
//! - `result` - Outcome types (`DeployOutcome`, `StepReport`)
//! - `use_case` - Fail-fast executor (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use wjs_deploy::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(ProcessRunner::new());
//! let outcome = use_case.execute(&plan)?;
//! ```

mod result;
mod use_case;

pub use result::{DeployOutcome, StepReport};
pub use use_case::DeployUseCase;
