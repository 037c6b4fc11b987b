//! # Checkout Orchestration
//!
//! Applies the manifest-read / clone / swap pipeline to one or more
//! target directories: partition targets by whether they are already
//! git checkouts, fan the eligible ones out in parallel, and aggregate
//! one outcome per target.
//!
//! Targets are processed concurrently with rayon, one unit of work per
//! target. Within a unit the steps run strictly sequentially; across
//! units there is no shared mutable state - every target owns its own
//! uniquely named scratch directory. A failing target resolves to a
//! failure outcome while its siblings continue; there is no mid-batch
//! cancellation and no timeout on the clone step.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::git::{GitOperations, SystemGit};
use crate::manifest;
use crate::swap::{self, RealFs, SwapOperations};

/// Options for a checkout run.
///
/// Passed explicitly into [`CheckoutOrchestrator::run`] - there is no
/// ambient or process-global configuration.
#[derive(Debug, Clone, Default)]
pub struct CheckoutOptions {
    /// Branch to pin the clone to; `None` follows the remote's primary
    /// branch.
    pub branch: Option<String>,
    /// Reprocess targets that are already git checkouts.
    pub force: bool,
    /// Surface the final path of the first replaced target in the
    /// report.
    pub expose_first: bool,
}

/// Result of processing one target.
#[derive(Debug)]
pub enum TargetResult {
    /// The component directory was replaced by a live clone.
    Replaced { component: String },
    /// The target is already a git checkout and force was not given.
    Skipped,
    /// The pipeline failed for this target; siblings are unaffected.
    Failed { error: Error },
}

/// Per-target outcome. A batch yields one of these per input target,
/// in input order.
#[derive(Debug)]
pub struct RunOutcome {
    pub target: PathBuf,
    pub result: TargetResult,
}

/// Aggregated result of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<RunOutcome>,
    /// Canonicalized path of the first successfully replaced target,
    /// when requested via [`CheckoutOptions::expose_first`].
    pub first_replaced: Option<PathBuf>,
}

impl BatchReport {
    /// True when no target failed. Skipped targets do not count as
    /// failures.
    pub fn all_succeeded(&self) -> bool {
        !self
            .outcomes
            .iter()
            .any(|outcome| matches!(outcome.result, TargetResult::Failed { .. }))
    }

    /// Targets skipped because they were already git checkouts.
    pub fn skipped(&self) -> impl Iterator<Item = &RunOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.result, TargetResult::Skipped))
    }

    /// Targets whose pipeline failed.
    pub fn failures(&self) -> impl Iterator<Item = &RunOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.result, TargetResult::Failed { .. }))
    }
}

/// Drives the checkout pipeline across a batch of targets.
///
/// Git and swap operations are injected behind traits so tests can
/// simulate clone and filesystem failures; production code uses the
/// system git binary and the real filesystem.
pub struct CheckoutOrchestrator {
    git_ops: Box<dyn GitOperations>,
    swap_ops: Box<dyn SwapOperations>,
}

impl Default for CheckoutOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutOrchestrator {
    /// Creates an orchestrator backed by the system git binary and the
    /// real filesystem.
    pub fn new() -> Self {
        Self {
            git_ops: Box::new(SystemGit),
            swap_ops: Box::new(RealFs),
        }
    }

    /// Creates an orchestrator with injected operations, for tests.
    #[cfg(test)]
    pub fn with_operations(
        git_ops: Box<dyn GitOperations>,
        swap_ops: Box<dyn SwapOperations>,
    ) -> Self {
        Self { git_ops, swap_ops }
    }

    /// Process every target, returning one outcome per target in input
    /// order.
    ///
    /// Fails fast - before any target is touched - if the batch is
    /// empty (`NoTargetProvided`) or any target path does not exist
    /// (`TargetNotFound`). Per-target pipeline errors never abort the
    /// batch; they surface as [`TargetResult::Failed`] outcomes.
    pub fn run(&self, targets: &[PathBuf], options: &CheckoutOptions) -> Result<BatchReport> {
        if targets.is_empty() {
            return Err(Error::NoTargetProvided);
        }
        for target in targets {
            if !target.exists() {
                return Err(Error::TargetNotFound {
                    path: target.display().to_string(),
                });
            }
        }

        let (under_vcs, plain): (Vec<usize>, Vec<usize>) =
            (0..targets.len()).partition(|&index| is_git_checkout(&targets[index]));

        // force reprocesses already checked out targets too, ahead of
        // the plain ones
        let (skipped, queue) = if options.force {
            let mut queue = under_vcs;
            queue.extend(plain);
            (Vec::new(), queue)
        } else {
            (under_vcs, plain)
        };

        if !skipped.is_empty() {
            debug!(
                "already checked out, skipping: {}",
                skipped
                    .iter()
                    .map(|&index| targets[index].display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let processed: Vec<(usize, TargetResult)> = queue
            .par_iter()
            .map(|&index| (index, self.process_target(&targets[index], options)))
            .collect();

        let mut results: Vec<Option<TargetResult>> = targets.iter().map(|_| None).collect();
        for index in skipped {
            results[index] = Some(TargetResult::Skipped);
        }
        for (index, result) in processed {
            results[index] = Some(result);
        }

        let outcomes: Vec<RunOutcome> = targets
            .iter()
            .zip(results)
            .map(|(target, result)| RunOutcome {
                target: target.clone(),
                result: result.expect("every target is either skipped or queued"),
            })
            .collect();

        let first_replaced = if options.expose_first {
            outcomes
                .iter()
                .find(|outcome| matches!(outcome.result, TargetResult::Replaced { .. }))
                .map(|outcome| {
                    fs::canonicalize(&outcome.target).unwrap_or_else(|_| outcome.target.clone())
                })
        } else {
            None
        };

        Ok(BatchReport {
            outcomes,
            first_replaced,
        })
    }

    fn process_target(&self, target: &Path, options: &CheckoutOptions) -> TargetResult {
        match self.replace_component(target, options) {
            Ok(component) => {
                info!(
                    "replaced {} with a live clone of \"{component}\"",
                    target.display()
                );
                TargetResult::Replaced { component }
            }
            Err(error) => TargetResult::Failed { error },
        }
    }

    /// One target's pipeline: read manifest, clone to scratch, swap.
    /// Strictly sequential; the first failing step aborts the rest.
    fn replace_component(&self, target: &Path, options: &CheckoutOptions) -> Result<String> {
        let manifest = manifest::read(target)?;
        debug!(
            "found bower component \"{}\" -> {}",
            manifest.name, manifest.url
        );

        let scratch = scratch_path(target);
        self.git_ops
            .clone(&manifest.url, options.branch.as_deref(), &scratch)?;
        swap::swap(self.swap_ops.as_ref(), target, &scratch)?;

        Ok(manifest.name)
    }
}

/// True when the target already carries version-control metadata.
fn is_git_checkout(target: &Path) -> bool {
    target.join(".git").exists()
}

/// Unique scratch sibling for `target`: `<parent>/<name>.tmp<nanos>`.
///
/// The high-resolution timestamp keeps concurrent runs over the same
/// target from colliding on the scratch name.
fn scratch_path(target: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "component".to_string());
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{name}.tmp{nanos}"))
}
