use std::env::VarError;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use wjs_deploy::application::deploy::DeployUseCase;
use wjs_deploy::config::load_layered;
use wjs_deploy::domain::ports::DeployEventSink;
use wjs_deploy::domain::services::plan_for;
use wjs_deploy::infrastructure::{ConsoleEventSink, DeployLock, JsonEventSink, ProcessRunner};
use wjs_deploy::{CommandToken, DeployError};

use crate::ui::output::print_config_warnings;

use super::SSH_COMMAND_ENV_VAR;

/// Entry point for the forced command
pub fn cmd_dispatch(config: Option<&Path>, no_lock: bool, json: bool) -> Result<()> {
    let raw = std::env::var(SSH_COMMAND_ENV_VAR).map_err(|err| match err {
        VarError::NotPresent => DeployError::MissingCommand,
        VarError::NotUnicode(raw) => DeployError::UnrecognizedCommand {
            token: raw.to_string_lossy().into_owned(),
        },
    })?;
    info!(command = %raw, "dispatching forced command");
    cmd_run(&raw, config, no_lock, json)
}

pub fn cmd_run(raw: &str, config: Option<&Path>, no_lock: bool, json: bool) -> Result<()> {
    let token = CommandToken::parse(raw)?;

    let loaded = load_layered(config)?;
    if let Some(path) = &loaded.path {
        if json {
            for w in &loaded.warnings {
                warn!(key = %w.key, file = %path.display(), "unknown configuration key");
            }
        } else {
            print_config_warnings(path, &loaded.warnings);
        }
    }

    let profile = loaded.config.profile_table().select(&token)?;
    let plan = plan_for(&profile);

    let _lock = if no_lock {
        None
    } else {
        Some(DeployLock::acquire(&profile.root_path)?)
    };

    let (runner, events): (ProcessRunner, Arc<dyn DeployEventSink>) = if json {
        (ProcessRunner::for_json(), Arc::new(JsonEventSink::stdout()))
    } else {
        (ProcessRunner::new(), Arc::new(ConsoleEventSink::stdout()))
    };

    DeployUseCase::new(runner).with_events(events).execute(&plan)?;
    Ok(())
}
