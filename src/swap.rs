//! # Directory Swapping
//!
//! Replaces a target directory with a freshly cloned scratch directory:
//! delete the original, then rename the scratch into its place. Each
//! step is a checkpoint with its own failure story, and the scratch
//! clone is never deleted on failure.
//!
//! The final rename relies on the filesystem's rename-within-volume
//! atomicity; the delete step carries no crash-safety guarantee.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// The two filesystem primitives the swap is built on - a trait so
/// both failure legs can be exercised in tests without real
/// filesystem faults.
pub trait SwapOperations: Send + Sync {
    fn remove_dir_all(&self, path: &Path) -> std::io::Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;
}

/// The default implementation of [`SwapOperations`], backed by the real
/// filesystem.
pub struct RealFs;

impl SwapOperations for RealFs {
    fn remove_dir_all(&self, path: &Path) -> std::io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        fs::rename(from, to)
    }
}

/// Replace `target` with `scratch`.
///
/// If the delete fails, the original is presumed still (at least
/// partially) present and the scratch clone is left intact, named in
/// the error. If the delete succeeds but the rename fails, the original
/// content is gone; the error says so (`original_lost`) and the scratch
/// clone is deliberately preserved so the rename can be completed by
/// hand. No retry is attempted.
pub fn swap(ops: &dyn SwapOperations, target: &Path, scratch: &Path) -> Result<()> {
    debug!("deleting component directory {}", target.display());
    ops.remove_dir_all(target).map_err(|e| Error::SwapFailed {
        path: target.display().to_string(),
        detail: format!(
            "could not delete component directory: {e}; clone preserved at {}",
            scratch.display()
        ),
        original_lost: false,
    })?;

    debug!(
        "renaming {} -> {}",
        scratch.display(),
        target.display()
    );
    ops.rename(scratch, target).map_err(|e| Error::SwapFailed {
        path: target.display().to_string(),
        detail: format!(
            "original content deleted, but renaming the clone failed: {e}; \
             clone preserved at {}",
            scratch.display()
        ),
        original_lost: true,
    })?;

    Ok(())
}
