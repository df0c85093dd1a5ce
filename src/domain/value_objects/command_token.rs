//! Command token value object
//!
//! Parses the string an SSH client asked to run into one of the accepted
//! deployment commands:
//!
//! - `deploy-{prod,pp,dev}-{janeway,wjs}`
//! - `deploy-test-wjs:<tag>`

use crate::error::{DeployError, DeployResult};

use super::{Environment, ReleaseTag, Target};

const PREFIX: &str = "deploy-";
const PINNED_PREFIX: &str = "deploy-test-wjs:";

/// A recognized deployment command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandToken {
    environment: Environment,
    target: Target,
    release: Option<ReleaseTag>,
}

impl CommandToken {
    /// Parse a raw command string.
    ///
    /// Surrounding ASCII whitespace is ignored. Everything else must match
    /// exactly (case-sensitive).
    pub fn parse(raw: &str) -> DeployResult<Self> {
        let token = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        let unrecognized = || DeployError::UnrecognizedCommand {
            token: raw.to_string(),
        };

        if let Some(tag) = token.strip_prefix(PINNED_PREFIX) {
            return Ok(Self::pinned(ReleaseTag::parse(tag)?));
        }

        let rest = token.strip_prefix(PREFIX).ok_or_else(unrecognized)?;
        let (env, target) = rest.split_once('-').ok_or_else(unrecognized)?;
        let environment = Environment::from_slug(env).ok_or_else(unrecognized)?;
        let target = Target::from_slug(target).ok_or_else(unrecognized)?;

        // The test instance only ever runs pinned package releases
        if environment == Environment::Test {
            return Err(unrecognized());
        }

        Ok(Self {
            environment,
            target,
            release: None,
        })
    }

    /// `deploy-test-wjs:<tag>`
    pub fn pinned(release: ReleaseTag) -> Self {
        Self {
            environment: Environment::Test,
            target: Target::Wjs,
            release: Some(release),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn release(&self) -> Option<&ReleaseTag> {
        self.release.as_ref()
    }

    /// Every accepted token form, for help output
    pub fn accepted_forms() -> Vec<String> {
        let mut forms = Vec::new();
        for env in [Environment::Prod, Environment::Pp, Environment::Dev] {
            for target in Target::ALL {
                forms.push(format!("{}{}-{}", PREFIX, env.slug(), target.slug()));
            }
        }
        forms.push(format!("{}<tag>", PINNED_PREFIX));
        forms
    }
}

impl std::fmt::Display for CommandToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}-{}", PREFIX, self.environment, self.target)?;
        if let Some(release) = &self.release {
            write!(f, ":{}", release)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for CommandToken {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
