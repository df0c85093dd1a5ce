#![allow(dead_code)]

//! Common test utilities for wjs-deploy CLI tests.
//!
//! - `TestEnv`: a fake server tree (Janeway root, virtualenv with recording
//!   `pip`/`python`, vassal directory) plus a config file pointing at it
//! - `TestResult`: captured output of one CLI run

pub mod env;

pub use env::*;
