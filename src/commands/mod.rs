//! Command handlers for the `wjs-deploy` binary

pub mod check_config;
pub mod plan;
pub mod run;
pub mod tokens;

/// Environment variable sshd sets for forced commands
pub const SSH_COMMAND_ENV_VAR: &str = "SSH_ORIGINAL_COMMAND";
