//! Console Event Sink
//!
//! Human-readable progress for operators watching the SSH session.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    total: Mutex<usize>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            total: Mutex::new(0),
        }
    }

    fn line(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn total(&self) -> usize {
        self.total.lock().map(|t| *t).unwrap_or(0)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                profile,
                step_count,
            } => {
                if let Ok(mut total) = self.total.lock() {
                    *total = step_count;
                }
                self.line(&format!("==> Deploying {} ({} steps)", profile, step_count));
            }
            DeployEvent::StepStarted {
                index,
                phase,
                command,
            } => {
                self.line(&format!(
                    "[{}/{}] {}: {}",
                    index + 1,
                    self.total(),
                    phase,
                    command
                ));
            }
            DeployEvent::StepDone { .. } => {}
            DeployEvent::StepFailed { index, error, .. } => {
                self.line(&format!("✗ step {} failed: {}", index + 1, error));
            }
            DeployEvent::Completed {
                profile,
                duration_ms,
                ..
            } => {
                let secs = Duration::from_millis(duration_ms as u64).as_secs_f64();
                self.line(&format!("✓ {} deployed in {:.1}s", profile, secs));
            }
        }
    }
}
