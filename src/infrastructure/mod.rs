//! Infrastructure Layer
//!
//! Implementations of the domain ports that touch the operating system.

pub mod events;
pub mod lock;
pub mod process;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use lock::{DeployLock, LOCK_FILE_NAME};
pub use process::ProcessRunner;
