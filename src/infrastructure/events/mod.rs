//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for automation
//! - ConsoleEventSink: Human-readable progress

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::{event_to_json, JsonEventSink};
