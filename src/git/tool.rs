//! Checking that a usable git is available.

use tokio::process::Command;

use crate::error::CommitError;

/// Check if `program` is installed and runs.
///
/// Uses the `which` crate for cross-platform executable detection, then
/// verifies `<program> --version` succeeds.
pub async fn check_git_installed(program: &str) -> Result<(), CommitError> {
    if which::which(program).is_err() {
        return Err(CommitError::GitNotInstalled);
    }

    let version_check = Command::new(program)
        .arg("--version")
        .output()
        .await
        .map_err(CommitError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(CommitError::GitNotInstalled);
    }

    Ok(())
}
