//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::services::{PackageSettings, ProfileOverride, ProfileTable, DEFAULT_PACKAGE_NAME};
use crate::domain::value_objects::{Environment, Target};

/// `[package]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Distribution name (default `wjs.jcom_profile`)
    #[serde(default)]
    pub name: Option<String>,

    /// `--index-url` for pip
    #[serde(default)]
    pub index: Option<String>,

    /// Default `JANEWAY_SETTINGS_MODULE` for every profile
    #[serde(default)]
    pub settings_module: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    /// Overrides keyed by `<env>-<target>`, e.g. `prod-janeway`
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileOverride>,
}

impl Config {
    /// Build the selector table: built-in profiles with this config applied.
    ///
    /// Profile keys that don't name a known profile are skipped; they are
    /// reported as warnings when the file is loaded.
    pub fn profile_table(&self) -> ProfileTable {
        let package = PackageSettings {
            name: self
                .package
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string()),
            index: self.package.index.clone(),
            settings_module: self.package.settings_module.clone(),
        };

        let mut table = ProfileTable::builtin().with_package(package);
        for (key, profile) in &self.profiles {
            if let Some((env, target)) = parse_profile_key(key) {
                table.apply_override(env, target, profile);
            }
        }
        table
    }
}

/// Split `prod-janeway` into its environment and target
pub fn parse_profile_key(key: &str) -> Option<(Environment, Target)> {
    let (env, target) = key.split_once('-')?;
    Some((Environment::from_slug(env)?, Target::from_slug(target)?))
}
