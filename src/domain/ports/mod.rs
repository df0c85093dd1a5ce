//! Ports - interfaces the infrastructure layer implements

mod deploy_events;
mod step_runner;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use step_runner::{ExitInfo, StepRunner};
