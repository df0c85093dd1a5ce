//! Domain Layer
//!
//! Pure deployment logic without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Command tokens, environments, targets, release tags
//! - `entities/` - Deployment profile and plan
//! - `services/` - Environment selector and planner
//! - `ports/` - Interfaces for process execution and event reporting

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
