//! Deploy Lock
//!
//! Advisory exclusive lock on `<root>/.wjs-deploy.lock`. Two deployments of
//! the same installation never overlap; the second one fails immediately.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::{DeployError, DeployResult};

/// Lock file name inside the installation root
pub const LOCK_FILE_NAME: &str = ".wjs-deploy.lock";

/// Held for the duration of a deployment; released on drop
#[derive(Debug)]
pub struct DeployLock {
    file: File,
    path: PathBuf,
}

impl DeployLock {
    /// Try to take the lock for an installation root without waiting
    pub fn acquire(root: &Path) -> DeployResult<Self> {
        let path = root.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        file.try_lock_exclusive().map_err(|err| lock_error(&path, err))?;

        debug!(path = %path.display(), "deploy lock acquired");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Only contention means another deployment; other flock failures are I/O errors
fn lock_error(path: &Path, err: io::Error) -> DeployError {
    let contended = err.kind() == io::ErrorKind::WouldBlock
        || (err.raw_os_error().is_some()
            && err.raw_os_error() == fs2::lock_contended_error().raw_os_error());
    if contended {
        DeployError::DeployLocked {
            path: path.to_path_buf(),
        }
    } else {
        DeployError::Io(err)
    }
}

impl Drop for DeployLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
