//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod command_token;
mod environment;
mod release_tag;
mod target;

pub use command_token::CommandToken;
pub use environment::Environment;
pub use release_tag::{ReleaseTag, MAX_TAG_LEN};
pub use target::Target;
