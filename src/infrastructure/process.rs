//! Process Step Runner
//!
//! Runs plan steps as real child processes. Programs receive their arguments
//! as argv; nothing is ever passed through `sh -c`.

use std::fs::OpenOptions;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::SystemTime;

use crate::domain::entities::StepCommand;
use crate::domain::ports::{ExitInfo, StepRunner};
use crate::error::{DeployError, DeployResult};

/// Step runner backed by `std::process::Command`
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    /// Send child stdout to our stderr (keeps stdout free for NDJSON)
    quiet_stdout: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner for `--json` mode
    pub fn for_json() -> Self {
        Self { quiet_stdout: true }
    }
}

impl StepRunner for ProcessRunner {
    fn exec(&self, cmd: &StepCommand) -> DeployResult<ExitInfo> {
        let mut command = Command::new(&cmd.program);
        command
            .args(&cmd.args)
            .current_dir(&cmd.cwd)
            .envs(cmd.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());

        if self.quiet_stdout {
            command.stdout(Stdio::from(std::io::stderr()));
        } else {
            command.stdout(Stdio::inherit());
        }

        let status = command.status().map_err(|e| DeployError::SpawnFailed {
            program: cmd.program.display().to_string(),
            source: e,
        })?;

        Ok(ExitInfo {
            success: status.success(),
            code: status.code(),
        })
    }

    fn touch(&self, path: &Path) -> DeployResult<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        file.set_modified(SystemTime::now())?;
        Ok(())
    }
}
