//! Deploy Use Case
//!
//! Executes a plan in strict order:
//! 1. Every step runs only after the previous one succeeded
//! 2. The first failure aborts the run (no rollback, no retry)
//! 3. The reload marker is touched last, so a failed run never reloads

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::domain::entities::{DeployPlan, DeployStep, StepAction};
use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink, StepRunner};
use crate::error::{DeployError, DeployResult};

use super::result::{DeployOutcome, StepReport};

/// Deploy use case - runs a plan through a `StepRunner`
pub struct DeployUseCase<R>
where
    R: StepRunner,
{
    runner: R,
    events: Arc<dyn DeployEventSink>,
}

impl<R> DeployUseCase<R>
where
    R: StepRunner,
{
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute every step of the plan, stopping at the first failure
    pub fn execute(&self, plan: &DeployPlan) -> DeployResult<DeployOutcome> {
        let started = Instant::now();
        info!(profile = %plan.profile, steps = plan.len(), "starting deployment");
        self.events.on_event(DeployEvent::Started {
            profile: plan.profile.clone(),
            step_count: plan.len(),
        });

        let mut reports = Vec::with_capacity(plan.len());
        for (index, step) in plan.steps.iter().enumerate() {
            let command = step.action.display();
            self.events.on_event(DeployEvent::StepStarted {
                index,
                phase: step.phase,
                command: command.clone(),
            });
            info!(phase = %step.phase, "{}", command);

            let step_started = Instant::now();
            if let Err(err) = self.run_step(step) {
                error!(phase = %step.phase, error = %err, "step failed, aborting deployment");
                self.events.on_event(DeployEvent::StepFailed {
                    index,
                    phase: step.phase,
                    error: err.to_string(),
                });
                return Err(err);
            }

            let duration = step_started.elapsed();
            debug!(phase = %step.phase, ?duration, "step done");
            self.events.on_event(DeployEvent::StepDone {
                index,
                phase: step.phase,
                duration_ms: duration.as_millis(),
            });
            reports.push(StepReport {
                phase: step.phase,
                command,
                duration,
            });
        }

        let duration = started.elapsed();
        info!(profile = %plan.profile, ?duration, "deployment complete");
        self.events.on_event(DeployEvent::Completed {
            profile: plan.profile.clone(),
            step_count: reports.len(),
            duration_ms: duration.as_millis(),
        });

        Ok(DeployOutcome {
            profile: plan.profile.clone(),
            steps: reports,
            duration,
        })
    }

    fn run_step(&self, step: &DeployStep) -> DeployResult<()> {
        match &step.action {
            StepAction::Exec(cmd) => {
                debug!(program = %cmd.program.display(), args = ?cmd.args, cwd = %cmd.cwd.display(), "exec");
                let exit = self.runner.exec(cmd)?;
                if exit.success {
                    Ok(())
                } else {
                    Err(DeployError::StepFailure {
                        phase: step.phase,
                        command: cmd.display(),
                        code: exit.code,
                    })
                }
            }
            StepAction::Touch { path } => self.runner.touch(path),
        }
    }
}
