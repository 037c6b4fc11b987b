//! # Error Handling
//!
//! Centralized error type for `bower-git`, built with `thiserror`. Each
//! variant corresponds to one failure mode of the checkout pipeline and
//! carries enough context to name the offending path or URL in
//! user-facing output.
//!
//! Manifest and clone errors abort only the affected target's pipeline;
//! `NoTargetProvided` and `TargetNotFound` abort the whole invocation
//! before any work starts.

use thiserror::Error;

/// Main error type for bower-git operations
#[derive(Error, Debug)]
pub enum Error {
    /// The invocation supplied no target directories at all.
    #[error("no target directory provided")]
    NoTargetProvided,

    /// A supplied target path does not exist on the filesystem.
    ///
    /// Raised before any target is processed; nothing has been touched.
    #[error("target directory not found: {path}")]
    TargetNotFound { path: String },

    /// The target directory contains no `bower.json` manifest.
    #[error("no bower.json found in {path}")]
    ManifestMissing { path: String },

    /// The manifest file exists but cannot be parsed as JSON.
    #[error("invalid bower.json in {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// The manifest lacks `repository.url` or `repository.type`.
    #[error("no repository information found in bower.json for {path}")]
    MissingRepositoryInfo { path: String },

    /// The manifest names a version-control system other than git.
    #[error("component in {path} is not a git repository (repository type: {repository_type})")]
    UnsupportedRepositoryType {
        path: String,
        repository_type: String,
    },

    /// `git clone` failed. The detail is the underlying tool's stderr,
    /// surfaced verbatim for diagnosis.
    #[error("git clone failed for {url}: {detail}")]
    CloneFailed { url: String, detail: String },

    /// The delete-and-rename swap failed.
    ///
    /// `original_lost` marks the critical leg: the target content was
    /// already deleted when the rename failed. The scratch clone is
    /// preserved either way and named in `detail`.
    #[error("directory swap failed for {path}: {detail}")]
    SwapFailed {
        path: String,
        detail: String,
        original_lost: bool,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
