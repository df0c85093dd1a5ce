//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.
//! In production the binary is installed as an SSH forced command:
//!
//! ```text
//! command="wjs-deploy dispatch",restrict ssh-ed25519 AAAA... ci@gitlab
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// wjs-deploy - restricted deploy dispatcher for the WJS Janeway installations
#[derive(Parser, Debug)]
#[command(name = "wjs-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'wjs-deploy tokens' to list the accepted deploy commands.")]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $WJS_DEPLOY_CONFIG, then /etc/wjs-deploy/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the command found in SSH_ORIGINAL_COMMAND (forced-command entry point)
    Dispatch {
        /// Don't take the per-installation deploy lock
        #[arg(long)]
        no_lock: bool,
    },

    /// Deploy an explicit command token (e.g. deploy-prod-wjs)
    Run {
        /// Command token
        token: String,

        /// Don't take the per-installation deploy lock
        #[arg(long)]
        no_lock: bool,
    },

    /// Show the steps a token would run, without running them
    Plan {
        /// Command token
        token: String,
    },

    /// List the accepted command tokens
    Tokens,

    /// Validate the configuration file and show the resolved profiles
    CheckConfig,
}
