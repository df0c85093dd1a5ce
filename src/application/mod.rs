//! Application Layer
//!
//! Use cases that orchestrate domain services and ports.

pub mod deploy;
