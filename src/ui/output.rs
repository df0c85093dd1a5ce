use std::path::Path;

use wjs_deploy::config::ConfigWarning;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Report a fatal error on stderr (human mode) or as a `failed` event
pub fn print_error(command: &str, err: &anyhow::Error, exit_code: i32, json: bool) {
    if json {
        let _ = super::json::emit(serde_json::json!({
            "event": "failed",
            "command": command,
            "error": format!("{:#}", err),
            "exit_code": exit_code,
        }));
    } else {
        eprintln!("✗ Error: {:#}", err);
    }
}
