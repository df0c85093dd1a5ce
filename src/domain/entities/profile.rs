//! Deployment profile entity

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{Environment, ReleaseTag, Target};

/// Everything the executor needs to know about one installation.
///
/// Built fresh for every invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentProfile {
    pub environment: Environment,
    pub target: Target,
    /// Janeway checkout (contains `src/manage.py` and `requirements.txt`)
    pub root_path: PathBuf,
    /// `bin/` directory of the virtualenv (holds `python` and `pip`)
    pub venv_bin_path: PathBuf,
    /// uwsgi vassal file touched to reload the workers
    pub reload_marker_path: PathBuf,
    /// Git branch pulled for the host platform
    pub branch_name: String,
    /// Allow pip to pick pre-release versions
    pub prerelease: bool,
    /// Exact package release to install, if pinned
    #[serde(serialize_with = "serialize_release")]
    pub release: Option<ReleaseTag>,
    /// Distribution name of the customization package
    pub package_name: String,
    /// Package index URL; pip's own configuration applies when unset
    pub package_index: Option<String>,
    /// Exported as `JANEWAY_SETTINGS_MODULE` to every step
    pub settings_module: Option<String>,
}

impl DeploymentProfile {
    pub fn python(&self) -> PathBuf {
        self.venv_bin_path.join("python")
    }

    pub fn pip(&self) -> PathBuf {
        self.venv_bin_path.join("pip")
    }

    /// `src/manage.py`, relative to `root_path`
    pub fn manage_py(&self) -> PathBuf {
        PathBuf::from("src").join("manage.py")
    }

    /// pip requirement for the customization package
    pub fn requirement(&self) -> String {
        match &self.release {
            Some(release) => format!("{}=={}", self.package_name, release),
            None => self.package_name.clone(),
        }
    }

    /// Short label such as `prod-janeway`
    pub fn key(&self) -> String {
        format!("{}-{}", self.environment, self.target)
    }
}

fn serialize_release<S>(release: &Option<ReleaseTag>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match release {
        Some(tag) => serializer.serialize_some(tag.as_str()),
        None => serializer.serialize_none(),
    }
}
