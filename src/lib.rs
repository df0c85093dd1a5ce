//! wjs-deploy - restricted deploy dispatcher for the WJS Janeway installations
//!
//! A single command token (usually `SSH_ORIGINAL_COMMAND` of a forced
//! command) selects a deployment profile; the profile becomes a fixed plan
//! (update source, migrate, build assets, reload) that runs fail-fast.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::deploy::{DeployOutcome, DeployUseCase};
pub use config::Config;
pub use domain::entities::{DeployPlan, DeploymentProfile, Phase};
pub use domain::services::{plan_for, ProfileTable};
pub use domain::value_objects::{CommandToken, Environment, ReleaseTag, Target};
pub use error::{DeployError, DeployResult};
