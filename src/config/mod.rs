//! Configuration module for wjs-deploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WJS_DEPLOY_*)
//! 3. Config file (`--config`, `$WJS_DEPLOY_CONFIG`, `/etc/wjs-deploy/config.toml`,
//!    `~/.config/wjs-deploy/config.toml`)
//! 4. Built-in profiles (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, resolve_config_path, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, CONFIG_ENV_VAR, SYSTEM_CONFIG_PATH,
};
pub use types::{parse_profile_key, Config, PackageConfig};
