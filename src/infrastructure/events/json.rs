//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event to its NDJSON object
pub fn event_to_json(event: DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            profile,
            step_count,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "profile": profile,
            "step_count": step_count,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),

        DeployEvent::StepStarted {
            index,
            phase,
            command,
        } => serde_json::json!({
            "event": "step_start",
            "command": "deploy",
            "index": index,
            "phase": phase,
            "step": command,
        }),

        DeployEvent::StepDone {
            index,
            phase,
            duration_ms,
        } => serde_json::json!({
            "event": "step_done",
            "command": "deploy",
            "index": index,
            "phase": phase,
            "duration_ms": duration_ms as u64,
        }),

        DeployEvent::StepFailed {
            index,
            phase,
            error,
        } => serde_json::json!({
            "event": "step_failed",
            "command": "deploy",
            "index": index,
            "phase": phase,
            "error": error,
        }),

        DeployEvent::Completed {
            profile,
            step_count,
            duration_ms,
        } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "profile": profile,
            "step_count": step_count,
            "duration_ms": duration_ms as u64,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(event));
    }
}
