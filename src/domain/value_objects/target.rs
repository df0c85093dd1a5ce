//! Target value object - what gets deployed

use serde::{Deserialize, Serialize};

/// The codebase a deployment updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The host platform (a git checkout of Janeway)
    Janeway,
    /// The customization package installed from the package index
    Wjs,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Janeway, Target::Wjs];

    pub fn slug(&self) -> &'static str {
        match self {
            Target::Janeway => "janeway",
            Target::Wjs => "wjs",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Janeway => "Janeway",
            Target::Wjs => "wjs.jcom_profile",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
