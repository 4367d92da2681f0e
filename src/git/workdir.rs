//! Locating the working directory to commit in.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::error::ConfigError;

/// Resolve the directory `git commit` should run in.
///
/// An explicit directory is canonicalized and used as is. Otherwise the
/// repository containing `start` is discovered and its work tree returned.
pub fn resolve_working_directory(
    explicit: Option<&Path>,
    start: &Path,
) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = explicit {
        return dir.canonicalize().map_err(|source| ConfigError::BadDirectory {
            path: dir.to_path_buf(),
            source,
        });
    }

    let repo = Repository::discover(start).map_err(ConfigError::NotARepository)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| ConfigError::BareRepository(repo.path().to_path_buf()))?;

    debug!("Discovered work tree at {}", workdir.display());

    workdir
        .canonicalize()
        .map_err(|source| ConfigError::BadDirectory {
            path: workdir.to_path_buf(),
            source,
        })
}
