//! Running `git commit` and classifying its result.
//!
//! The message is fed to `git commit -F -` on stdin from a separate task
//! while stdout and stderr are drained concurrently, so a git that starts
//! writing before it has read its input cannot deadlock us.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::CommitError;

use super::message::CommitMessage;

/// Text git prints when there is nothing staged.
const NOTHING_TO_COMMIT: &str = "nothing to commit";

/// Result of a commit attempt that actually ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// git exited 0. Carries the first line of its stdout.
    Success(String),
    /// git refused because nothing was staged.
    NothingToCommit,
    /// Any other non-zero exit. Carries git's output verbatim.
    Failure(String),
}

/// Raw output of one git run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Trait for running `git commit -F -`.
///
/// This abstraction allows replacing the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Commit with `message` read from stdin, in `cwd`.
    async fn commit(&self, cwd: &Path, message: &str) -> Result<GitOutput, CommitError>;
}

/// Runner that spawns a real git process.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: OsString,
    leading_args: Vec<OsString>,
}

impl SystemGit {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Add an argument placed before `commit -F -`, e.g. `-c key=value`.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_args.push(arg.into());
        self
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

#[async_trait]
impl GitRunner for SystemGit {
    async fn commit(&self, cwd: &Path, message: &str) -> Result<GitOutput, CommitError> {
        debug!(
            "Running {} commit -F - in {}",
            self.program.to_string_lossy(),
            cwd.display()
        );

        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(["commit", "-F", "-"])
            .current_dir(cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A caller-side timeout drops this future; git must not outlive it.
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CommitError::GitNotInstalled,
                _ => CommitError::SpawnFailed(e),
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            CommitError::OutputFailed(std::io::Error::other("git stdin was not captured"))
        })?;

        let input = message.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            let written = stdin.write_all(&input).await;
            // Dropping stdin closes the pipe so git sees end of input.
            drop(stdin);
            written
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(CommitError::OutputFailed)?;

        match writer.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("git exited before reading the whole message");
            }
            Ok(Err(e)) => warn!("Failed to write commit message to git: {}", e),
            Err(e) => warn!("Commit message writer task failed: {}", e),
        }

        debug!("git exited with {:?}", output.status.code());

        Ok(GitOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Commit `message` in `cwd` with the system git.
pub async fn execute(
    message: &CommitMessage,
    cwd: Option<&Path>,
) -> Result<CommitOutcome, CommitError> {
    execute_with(&SystemGit::default(), message, cwd).await
}

/// Commit `message` in `cwd` using `runner`.
///
/// The working directory is checked before anything is spawned. Setup
/// problems come back as `Err`; every commit that actually ran comes back
/// as a [`CommitOutcome`].
pub async fn execute_with<R: GitRunner + ?Sized>(
    runner: &R,
    message: &CommitMessage,
    cwd: Option<&Path>,
) -> Result<CommitOutcome, CommitError> {
    let cwd = check_working_directory(cwd)?;
    let output = runner.commit(cwd, message.as_str()).await?;
    Ok(classify(&output))
}

/// Classify git's output into a [`CommitOutcome`].
pub fn classify(output: &GitOutput) -> CommitOutcome {
    if output.code == Some(0) {
        let first_line = output.stdout.lines().next().unwrap_or("");
        return CommitOutcome::Success(first_line.to_string());
    }

    // git prints this on stdout, other tools on stderr.
    if output.stderr.contains(NOTHING_TO_COMMIT) || output.stdout.contains(NOTHING_TO_COMMIT) {
        return CommitOutcome::NothingToCommit;
    }

    let text = if output.stderr.is_empty() {
        &output.stdout
    } else {
        &output.stderr
    };

    CommitOutcome::Failure(text.clone())
}

fn check_working_directory(cwd: Option<&Path>) -> Result<&Path, CommitError> {
    let cwd = cwd.ok_or(CommitError::MissingWorkingDirectory)?;

    if !cwd.is_absolute() {
        return Err(CommitError::InvalidWorkingDirectory {
            path: cwd.to_path_buf(),
            reason: "path is not absolute".to_string(),
        });
    }

    match std::fs::metadata(cwd) {
        Ok(meta) if meta.is_dir() => Ok(cwd),
        Ok(_) => Err(CommitError::InvalidWorkingDirectory {
            path: cwd.to_path_buf(),
            reason: "not a directory".to_string(),
        }),
        Err(e) => Err(CommitError::InvalidWorkingDirectory {
            path: cwd.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
