//! # Repository Cloning
//!
//! Shells out to the system `git` command to clone a component's
//! repository into a scratch directory.
//!
//! Using the system git means authentication comes for free:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::fs;
use std::path::Path;
use std::process::Command;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clone `url` into `destination`, optionally pinned to `branch`.
    ///
    /// `destination` must not exist yet. On failure no partial clone
    /// directory is left behind.
    fn clone(&self, url: &str, branch: Option<&str>, destination: &Path) -> Result<()>;
}

/// The default implementation of [`GitOperations`], which uses the
/// system's `git` command to perform real clones.
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn clone(&self, url: &str, branch: Option<&str>, destination: &Path) -> Result<()> {
        clone(url, branch, destination)
    }
}

/// Execute `git clone <url> [-b <branch>] <destination>`.
///
/// A non-zero exit surfaces git's stderr verbatim. Any debris directory
/// an interrupted transfer left behind is removed best-effort before
/// returning, so a failed clone has no filesystem side effects.
pub fn clone(url: &str, branch: Option<&str>, destination: &Path) -> Result<()> {
    if destination.exists() {
        return Err(Error::CloneFailed {
            url: url.to_string(),
            detail: format!(
                "clone destination already exists: {}",
                destination.display()
            ),
        });
    }

    let mut command = Command::new("git");
    command.arg("clone").arg(url);
    if let Some(branch) = branch {
        command.args(["-b", branch]);
    }
    command.arg(destination);

    debug!("running {:?}", command);

    let output = command.output().map_err(|e| Error::CloneFailed {
        url: url.to_string(),
        detail: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // git can leave a partial directory behind on an interrupted
        // transfer; it must not survive a failed clone
        if destination.exists() {
            if let Err(e) = fs::remove_dir_all(destination) {
                warn!(
                    "failed to remove partial clone at {}: {}",
                    destination.display(),
                    e
                );
            }
        }

        return Err(Error::CloneFailed {
            url: url.to_string(),
            detail: stderr.trim().to_string(),
        });
    }

    if !destination.exists() {
        return Err(Error::CloneFailed {
            url: url.to_string(),
            detail: format!(
                "git reported success but {} was not created",
                destination.display()
            ),
        });
    }

    Ok(())
}
