use std::path::Path;

use anyhow::Result;

use wjs_deploy::config::load_layered;
use wjs_deploy::CommandToken;

use crate::ui::json;
use crate::ui::output::print_config_warnings;

pub fn cmd_check_config(config: Option<&Path>, json_output: bool) -> Result<()> {
    let loaded = load_layered(config)?;
    let table = loaded.config.profile_table();

    let mut profiles = Vec::new();
    for form in CommandToken::accepted_forms() {
        // The pinned form is shown with a placeholder release
        let raw = form.replace("<tag>", "0.0.0");
        let token = CommandToken::parse(&raw)?;
        profiles.push(table.select(&token)?);
    }

    if json_output {
        let warnings: Vec<_> = loaded
            .warnings
            .iter()
            .map(|w| {
                serde_json::json!({
                    "key": w.key,
                    "line": w.line,
                    "suggestion": w.suggestion,
                })
            })
            .collect();
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "check-config",
            "path": loaded.path.as_ref().map(|p| p.display().to_string()),
            "warnings": warnings,
            "profiles": profiles,
        }))?;
        return Ok(());
    }

    match &loaded.path {
        Some(path) => {
            println!("Config: {}", path.display());
            print_config_warnings(path, &loaded.warnings);
        }
        None => println!("Config: none (built-in profiles)"),
    }
    println!();

    for profile in &profiles {
        println!(
            "{:<14} root={} venv={} reload={} branch={} pre={}",
            profile.key(),
            profile.root_path.display(),
            profile.venv_bin_path.display(),
            profile.reload_marker_path.display(),
            profile.branch_name,
            profile.prerelease
        );
    }

    if loaded.warnings.is_empty() {
        println!();
        println!("✓ configuration OK");
    }
    Ok(())
}
