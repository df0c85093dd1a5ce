use std::path::Path;

use anyhow::Result;

use wjs_deploy::config::load_layered;
use wjs_deploy::domain::entities::StepAction;
use wjs_deploy::domain::services::plan_for;
use wjs_deploy::CommandToken;

use crate::ui::json;
use crate::ui::output::print_config_warnings;

pub fn cmd_plan(raw: &str, config: Option<&Path>, json_output: bool) -> Result<()> {
    let token = CommandToken::parse(raw)?;
    let loaded = load_layered(config)?;
    let profile = loaded.config.profile_table().select(&token)?;
    let plan = plan_for(&profile);

    if json_output {
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "plan",
            "token": token.to_string(),
            "profile": profile,
            "plan": plan,
        }))?;
        return Ok(());
    }

    if let Some(path) = &loaded.path {
        print_config_warnings(path, &loaded.warnings);
    }

    println!("Token:   {}", token);
    println!(
        "Profile: {} ({} / {})",
        profile.key(),
        profile.environment.display_name(),
        profile.target.display_name()
    );
    println!("Root:    {}", profile.root_path.display());
    println!("Venv:    {}", profile.venv_bin_path.display());
    println!("Reload:  {}", profile.reload_marker_path.display());
    if let Some(release) = &profile.release {
        println!("Release: {}", release);
    }
    println!();

    for (i, step) in plan.steps.iter().enumerate() {
        println!("{:>2}. [{}] {}", i + 1, step.phase, step.action.display());
        if let StepAction::Exec(cmd) = &step.action {
            for (key, value) in &cmd.env {
                println!("      {}={}", key, value);
            }
        }
    }

    Ok(())
}
