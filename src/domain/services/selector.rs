//! Environment selector
//!
//! Maps a parsed command token to its deployment profile. The built-in table
//! mirrors the layout of the WJS servers; configuration can override any
//! field of any profile but cannot add new tokens.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DeploymentProfile;
use crate::domain::value_objects::{CommandToken, Environment, Target};
use crate::error::{DeployError, DeployResult};

/// Default distribution name of the customization package
pub const DEFAULT_PACKAGE_NAME: &str = "wjs.jcom_profile";

const SERVER_HOME: &str = "/home/wjs";

/// Per-environment settings before the target is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSettings {
    pub root_path: PathBuf,
    pub venv_bin_path: PathBuf,
    pub reload_marker_path: PathBuf,
    pub branch_name: String,
    pub prerelease: bool,
    pub settings_module: Option<String>,
}

/// Partial profile read from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOverride {
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub venv_bin: Option<PathBuf>,
    #[serde(default)]
    pub reload_marker: Option<PathBuf>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub prerelease: Option<bool>,
    #[serde(default)]
    pub settings_module: Option<String>,
}

impl ProfileSettings {
    fn apply(&mut self, o: &ProfileOverride) {
        if let Some(root) = &o.root {
            self.root_path = root.clone();
        }
        if let Some(venv_bin) = &o.venv_bin {
            self.venv_bin_path = venv_bin.clone();
        }
        if let Some(marker) = &o.reload_marker {
            self.reload_marker_path = marker.clone();
        }
        if let Some(branch) = &o.branch {
            self.branch_name = branch.clone();
        }
        if let Some(prerelease) = o.prerelease {
            self.prerelease = prerelease;
        }
        if o.settings_module.is_some() {
            self.settings_module = o.settings_module.clone();
        }
    }
}

/// Package-wide settings shared by every profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    pub name: String,
    pub index: Option<String>,
    pub settings_module: Option<String>,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_PACKAGE_NAME.to_string(),
            index: None,
            settings_module: None,
        }
    }
}

/// Lookup table from (environment, target) to profile settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTable {
    entries: BTreeMap<(Environment, Target), ProfileSettings>,
    package: PackageSettings,
}

impl ProfileTable {
    /// The hard-coded server layout
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for (env, branch, prerelease) in [
            (Environment::Prod, "master", false),
            (Environment::Pp, "master", true),
            (Environment::Dev, "develop", true),
        ] {
            for target in Target::ALL {
                entries.insert((env, target), default_settings(env, branch, prerelease));
            }
        }
        entries.insert(
            (Environment::Test, Target::Wjs),
            default_settings(Environment::Test, "master", true),
        );

        Self {
            entries,
            package: PackageSettings::default(),
        }
    }

    pub fn with_package(mut self, package: PackageSettings) -> Self {
        self.package = package;
        self
    }

    /// Apply a configuration override to an existing profile.
    ///
    /// Returns `false` when the pair has no profile to override.
    pub fn apply_override(
        &mut self,
        environment: Environment,
        target: Target,
        o: &ProfileOverride,
    ) -> bool {
        match self.entries.get_mut(&(environment, target)) {
            Some(settings) => {
                settings.apply(o);
                true
            }
            None => false,
        }
    }

    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    pub fn keys(&self) -> impl Iterator<Item = (Environment, Target)> + '_ {
        self.entries.keys().copied()
    }

    /// Resolve the profile for a token. Pure: same input, same output.
    pub fn select(&self, token: &CommandToken) -> DeployResult<DeploymentProfile> {
        let environment = token.environment();
        let target = token.target();
        let settings = self.entries.get(&(environment, target)).ok_or_else(|| {
            DeployError::UnsupportedTarget {
                environment: environment.to_string(),
                target: target.to_string(),
            }
        })?;

        // A pinned release is also the branch/tag the profile deploys
        let branch_name = match token.release() {
            Some(release) => release.as_str().to_string(),
            None => settings.branch_name.clone(),
        };

        Ok(DeploymentProfile {
            environment,
            target,
            root_path: settings.root_path.clone(),
            venv_bin_path: settings.venv_bin_path.clone(),
            reload_marker_path: settings.reload_marker_path.clone(),
            branch_name,
            prerelease: settings.prerelease,
            release: token.release().cloned(),
            package_name: self.package.name.clone(),
            package_index: self.package.index.clone(),
            settings_module: settings
                .settings_module
                .clone()
                .or_else(|| self.package.settings_module.clone()),
        })
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn default_settings(env: Environment, branch: &str, prerelease: bool) -> ProfileSettings {
    let name = match env {
        Environment::Prod => "janeway".to_string(),
        other => format!("janeway-{}", other.slug()),
    };
    let home = PathBuf::from(SERVER_HOME);

    ProfileSettings {
        root_path: home.join(&name),
        venv_bin_path: home.join(".virtualenvs").join(&name).join("bin"),
        reload_marker_path: home.join("uwsgi").join("vassals").join(format!("{}.ini", name)),
        branch_name: branch.to_string(),
        prerelease,
        settings_module: None,
    }
}
