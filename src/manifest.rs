//! # Component Manifest Reading
//!
//! Loads and validates the `bower.json` manifest inside a target
//! directory, extracting the component name and its repository
//! coordinates. Reading has no side effects beyond the file read;
//! validation failures leave the target untouched.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Manifest file name expected inside every target directory.
pub const MANIFEST_FILE: &str = "bower.json";

/// Version-control system named by a manifest's `repository.type`.
///
/// Only git-backed components can be checked out; anything else is
/// rejected during [`read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    Git,
    Other,
}

/// Validated repository coordinates for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentManifest {
    pub name: String,
    pub url: String,
    pub repository_type: RepositoryType,
}

/// Raw shape of `bower.json` as written by bower. All fields are
/// optional at this layer so their absence maps to the dedicated error
/// variants instead of a generic parse failure.
#[derive(Debug, Deserialize)]
struct RawManifest {
    name: Option<String>,
    repository: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    url: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Read and validate the manifest inside `target`.
///
/// The component name falls back to the target directory's own name
/// when the manifest omits it; bower only ever used the name for
/// display.
pub fn read(target: &Path) -> Result<ComponentManifest> {
    let manifest_path = target.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Err(Error::ManifestMissing {
            path: target.display().to_string(),
        });
    }

    let data = fs::read_to_string(&manifest_path)?;
    let raw: RawManifest = serde_json::from_str(&data).map_err(|e| Error::InvalidManifest {
        path: target.display().to_string(),
        message: e.to_string(),
    })?;

    let repository = raw
        .repository
        .ok_or_else(|| missing_repository_info(target))?;
    let (url, kind) = match (repository.url, repository.kind) {
        (Some(url), Some(kind)) => (url, kind),
        _ => return Err(missing_repository_info(target)),
    };

    if kind != "git" {
        return Err(Error::UnsupportedRepositoryType {
            path: target.display().to_string(),
            repository_type: kind,
        });
    }

    let name = raw
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback_name(target));

    Ok(ComponentManifest {
        name,
        url,
        repository_type: RepositoryType::Git,
    })
}

fn missing_repository_info(target: &Path) -> Error {
    Error::MissingRepositoryInfo {
        path: target.display().to_string(),
    }
}

fn fallback_name(target: &Path) -> String {
    target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "component".to_string())
}
