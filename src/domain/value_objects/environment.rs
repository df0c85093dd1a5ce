//! Environment value object - which installation a deployment targets

use serde::{Deserialize, Serialize};

/// Server environment hosting a Janeway installation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production journals
    Prod,
    /// Pre-production (staging copy of production)
    Pp,
    /// Development instance
    Dev,
    /// Release-candidate testing instance
    Test,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Prod,
        Environment::Pp,
        Environment::Dev,
        Environment::Test,
    ];

    /// Token segment used in command strings (`deploy-<slug>-...`)
    pub fn slug(&self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Pp => "pp",
            Environment::Dev => "dev",
            Environment::Test => "test",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.slug() == slug)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Environment::Prod => "production",
            Environment::Pp => "pre-production",
            Environment::Dev => "development",
            Environment::Test => "test",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
