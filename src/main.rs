//! wjs-deploy CLI - restricted deploy dispatcher
//!
//! Usage: wjs-deploy <COMMAND>
//!
//! Commands:
//!   dispatch      Deploy the token in SSH_ORIGINAL_COMMAND
//!   run           Deploy an explicit token
//!   plan          Show the steps of a token without running them
//!   tokens        List accepted tokens
//!   check-config  Validate the configuration file

mod cli;
mod commands;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use wjs_deploy::DeployError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let config = cli.config.as_deref();

    let (name, result) = match &cli.command {
        Commands::Dispatch { no_lock } => (
            "dispatch",
            commands::run::cmd_dispatch(config, *no_lock, json),
        ),
        Commands::Run { token, no_lock } => (
            "deploy",
            commands::run::cmd_run(token, config, *no_lock, json),
        ),
        Commands::Plan { token } => ("plan", commands::plan::cmd_plan(token, config, json)),
        Commands::Tokens => ("tokens", commands::tokens::cmd_tokens(json)),
        Commands::CheckConfig => (
            "check-config",
            commands::check_config::cmd_check_config(config, json),
        ),
    };

    if let Err(err) = result {
        let code = exit_code(&err);
        ui::output::print_error(name, &err, code, json);
        std::process::exit(code);
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(1)
}
