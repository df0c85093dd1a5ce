//! Domain Entities

mod plan;
mod profile;

pub use plan::{DeployPlan, DeployStep, Phase, StepAction, StepCommand};
pub use profile::DeploymentProfile;
