//! Deployment planner
//!
//! Turns a profile into the fixed step sequence for its target. Pure: the
//! same profile always produces the same plan.

use crate::domain::entities::{
    DeployPlan, DeployStep, DeploymentProfile, Phase, StepAction, StepCommand,
};
use crate::domain::value_objects::Target;

/// Environment variable Janeway's `manage.py` reads its settings from
pub const SETTINGS_ENV_VAR: &str = "JANEWAY_SETTINGS_MODULE";

/// Build the plan for a profile
pub fn plan_for(profile: &DeploymentProfile) -> DeployPlan {
    let mut steps = Vec::new();

    match profile.target {
        Target::Janeway => {
            steps.push(exec(
                Phase::UpdateSource,
                command(profile, "git").args([
                    "pull",
                    "--ff-only",
                    "origin",
                    profile.branch_name.as_str(),
                ]),
            ));
            steps.push(exec(
                Phase::UpdateSource,
                command(profile, profile.pip()).args(["install", "-r", "requirements.txt"]),
            ));
        }
        Target::Wjs => {
            steps.push(exec(Phase::UpdateSource, pip_install(profile)));
            for installer in ["link_plugins", "install_themes"] {
                steps.push(exec(Phase::UpdateSource, manage(profile, &[installer])));
            }
        }
    }

    steps.push(exec(Phase::Migrate, manage(profile, &["migrate", "--noinput"])));
    steps.push(exec(Phase::BuildAssets, manage(profile, &["build_assets"])));
    steps.push(exec(
        Phase::BuildAssets,
        manage(profile, &["collectstatic", "--noinput"]),
    ));
    steps.push(DeployStep {
        phase: Phase::Reload,
        action: StepAction::Touch {
            path: profile.reload_marker_path.clone(),
        },
    });

    DeployPlan {
        profile: profile.key(),
        root_path: profile.root_path.clone(),
        steps,
    }
}

fn exec(phase: Phase, cmd: StepCommand) -> DeployStep {
    DeployStep {
        phase,
        action: StepAction::Exec(cmd),
    }
}

fn command(profile: &DeploymentProfile, program: impl Into<std::path::PathBuf>) -> StepCommand {
    let cmd = StepCommand::new(program, &profile.root_path);
    match &profile.settings_module {
        Some(module) => cmd.env(SETTINGS_ENV_VAR, module.as_str()),
        None => cmd,
    }
}

fn manage(profile: &DeploymentProfile, args: &[&str]) -> StepCommand {
    command(profile, profile.python())
        .arg(profile.manage_py().display().to_string())
        .args(args.iter().copied())
}

fn pip_install(profile: &DeploymentProfile) -> StepCommand {
    let mut cmd = command(profile, profile.pip()).args(["install", "--upgrade"]);
    if profile.prerelease {
        cmd = cmd.arg("--pre");
    }
    if let Some(index) = &profile.package_index {
        cmd = cmd.args(["--index-url", index.as_str()]);
    }
    cmd.arg(profile.requirement())
}
