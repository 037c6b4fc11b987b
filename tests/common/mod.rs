//! Shared test utilities for E2E tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;`.

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    #[allow(unused_imports)]
    pub use super::{component_dir, git_fixture_repo, manifest_for, scratch_dirs};
}

/// Common `bower.json` snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// Valid manifest pointing at a remote that is never contacted.
    pub const WIDGET: &str =
        r#"{"name":"widget","repository":{"url":"https://example.com/widget.git","type":"git"}}"#;

    /// Repository type other than git.
    pub const SVN: &str =
        r#"{"name":"widget","repository":{"url":"svn://example.com/widget","type":"svn"}}"#;

    /// No repository block at all.
    pub const NO_REPOSITORY: &str = r#"{"name":"widget"}"#;

    /// Invalid JSON for parse-error testing.
    pub const INVALID: &str = "{ this is not json";
}

/// A widget manifest pointing at a concrete repository path, so clones
/// stay on the local filesystem.
#[allow(dead_code)]
pub fn manifest_for(url: &Path) -> String {
    format!(
        r#"{{"name":"widget","repository":{{"url":"{}","type":"git"}}}}"#,
        url.display()
    )
}

/// Create a component directory with the given `bower.json` content and
/// a stale payload file standing in for the bower-installed component.
#[allow(dead_code)]
pub fn component_dir(temp: &TempDir, name: &str, manifest: &str) -> PathBuf {
    let dir = temp.child(name);
    dir.create_dir_all().unwrap();
    dir.child("bower.json").write_str(manifest).unwrap();
    dir.child("stale.txt").write_str("bower payload").unwrap();
    dir.path().to_path_buf()
}

/// Scratch directories left under `parent`, if any. A clean run leaves
/// none behind.
#[allow(dead_code)]
pub fn scratch_dirs(parent: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(parent)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().contains(".tmp"))
                .unwrap_or(false)
        })
        .collect()
}

/// Initialize a local git repository usable as a clone source without
/// network access: one commit on `main`, plus a `dev` branch carrying
/// an extra file.
#[allow(dead_code)]
pub fn git_fixture_repo(temp: &TempDir) -> PathBuf {
    let repo = temp.child("upstream");
    repo.create_dir_all().unwrap();
    let repo_path = repo.path().to_path_buf();

    git(&repo_path, &["init", "-b", "main"]);
    git(&repo_path, &["config", "user.email", "test@example.com"]);
    git(&repo_path, &["config", "user.name", "Test"]);
    std::fs::write(repo_path.join("upstream.txt"), "upstream payload").unwrap();
    git(&repo_path, &["add", "."]);
    git(&repo_path, &["commit", "--no-gpg-sign", "-m", "initial"]);

    git(&repo_path, &["checkout", "-b", "dev"]);
    std::fs::write(repo_path.join("dev-only.txt"), "dev payload").unwrap();
    git(&repo_path, &["add", "."]);
    git(&repo_path, &["commit", "--no-gpg-sign", "-m", "dev work"]);
    git(&repo_path, &["checkout", "main"]);

    repo_path
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git binary not available");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
