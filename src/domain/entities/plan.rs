//! Deployment plan entity
//!
//! A plan is the fully resolved, ordered list of external operations for one
//! deployment. Building it does no I/O, so `wjs-deploy plan` can show exactly
//! what `run` would do.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Stage of a deployment. Steps always run in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// git pull / pip install and package installers
    UpdateSource,
    /// Django schema migrations
    Migrate,
    /// Theme assets and collectstatic
    BuildAssets,
    /// Touch the uwsgi vassal
    Reload,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::UpdateSource => "update-source",
            Phase::Migrate => "migrate",
            Phase::BuildAssets => "build-assets",
            Phase::Reload => "reload",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An external program invocation. Arguments are passed as argv, never
/// through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

impl StepCommand {
    pub fn new(program: impl Into<PathBuf>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Human-readable command line (display only)
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// What a step does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepAction {
    /// Run a program and require exit status 0
    Exec(StepCommand),
    /// Create the file if missing and bump its modification time
    Touch { path: PathBuf },
}

impl StepAction {
    pub fn display(&self) -> String {
        match self {
            StepAction::Exec(cmd) => cmd.display(),
            StepAction::Touch { path } => format!("touch {}", path.display()),
        }
    }
}

/// One step of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployStep {
    pub phase: Phase,
    pub action: StepAction,
}

/// Ordered steps for one deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployPlan {
    /// Profile key, e.g. `prod-wjs`
    pub profile: String,
    pub root_path: PathBuf,
    pub steps: Vec<DeployStep>,
}

impl DeployPlan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Phases in execution order, with consecutive duplicates collapsed
    pub fn phases(&self) -> Vec<Phase> {
        let mut phases: Vec<Phase> = self.steps.iter().map(|s| s.phase).collect();
        phases.dedup();
        phases
    }
}
