//! Domain Services
//!
//! Stateless logic that works purely on domain types.

pub mod planner;
mod selector;

pub use planner::plan_for;
pub use selector::{
    PackageSettings, ProfileOverride, ProfileSettings, ProfileTable, DEFAULT_PACKAGE_NAME,
};
