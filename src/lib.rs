//! # Bower Git Library
//!
//! Core functionality for replacing bower-installed component
//! directories with live clones of their source repositories. It is
//! used by the `bower-git` command-line tool but can be embedded in
//! other tooling that needs the same substitution.
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: reads and validates the `bower.json`
//!   inside a target directory, extracting the component name and
//!   repository coordinates.
//! - **Cloning (`git`)**: shells out to the system `git` binary to
//!   clone the repository into a uniquely named scratch directory.
//! - **Swapping (`swap`)**: deletes the original component directory
//!   and renames the scratch clone into its place, with a checkpointed
//!   failure story that never destroys the clone.
//! - **Orchestration (`checkout`)**: applies the pipeline to one or
//!   more targets in parallel, enforcing the already-a-checkout guard
//!   and aggregating per-target outcomes.
//!
//! ## Execution Flow
//!
//! For each target directory, [`checkout::CheckoutOrchestrator::run`]
//! performs:
//!
//! 1. **Read**: parse `<target>/bower.json` for the repository URL.
//! 2. **Clone**: `git clone` into a scratch sibling of the target.
//! 3. **Swap**: delete the target, rename the scratch into its place.
//!
//! Targets that are already git checkouts are skipped unless force is
//! requested; one target's failure never aborts its siblings.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use bower_git::checkout::{CheckoutOptions, CheckoutOrchestrator};
//!
//! # fn main() -> bower_git::error::Result<()> {
//! let orchestrator = CheckoutOrchestrator::new();
//! let options = CheckoutOptions {
//!     branch: Some("develop".to_string()),
//!     ..CheckoutOptions::default()
//! };
//!
//! let report = orchestrator.run(&[PathBuf::from("components/widget")], &options)?;
//! assert!(report.all_succeeded());
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod error;
pub mod git;
pub mod manifest;
pub mod output;
pub mod swap;
