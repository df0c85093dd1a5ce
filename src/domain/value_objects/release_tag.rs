//! Release tag value object
//!
//! The only piece of a command token that comes from the client verbatim.
//! It ends up as part of a pip requirement (`wjs.jcom_profile==<tag>`), so
//! only a conservative character set is accepted.

use crate::error::{DeployError, DeployResult};

/// Longest tag accepted
pub const MAX_TAG_LEN: usize = 64;

/// A validated package release identifier (e.g. `1.2.3`, `5.0.0rc1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// Validate a raw tag.
    ///
    /// Accepts ASCII letters, digits, `_`, `.` and `-`. The first character
    /// must be alphanumeric and `..` is never allowed.
    pub fn parse(raw: &str) -> DeployResult<Self> {
        let invalid = |reason| DeployError::InvalidReleaseTag {
            tag: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("tag is empty"));
        }
        if raw.len() > MAX_TAG_LEN {
            return Err(invalid("tag is too long"));
        }
        if !raw.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return Err(invalid("tag must start with a letter or digit"));
        }
        if !raw.chars().all(is_tag_char) {
            return Err(invalid("tag may only contain letters, digits, '_', '.' and '-'"));
        }
        if raw.contains("..") {
            return Err(invalid("tag must not contain '..'"));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
