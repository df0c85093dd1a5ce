use anyhow::Result;

use wjs_deploy::CommandToken;

use crate::ui::json;

pub fn cmd_tokens(json_output: bool) -> Result<()> {
    let forms = CommandToken::accepted_forms();

    if json_output {
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "tokens",
            "tokens": forms,
        }))?;
    } else {
        for form in forms {
            println!("{}", form);
        }
    }
    Ok(())
}
