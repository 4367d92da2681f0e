//! Error types for quill modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Setup errors from the commit executor.
///
/// These mean no commit attempt took place. A commit that ran and was
/// rejected by git is reported as a [`crate::CommitOutcome`] instead.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("No working directory was provided")]
    MissingWorkingDirectory,

    #[error("Invalid working directory {}: {reason}", path.display())]
    InvalidWorkingDirectory { path: PathBuf, reason: String },

    #[error("git not found. Install git or point QUILL_GIT at a git executable")]
    GitNotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Failed to collect git output: {0}")]
    OutputFailed(#[source] std::io::Error),
}

/// Errors from validating commit fields before composing a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown commit type: {0}")]
    UnknownType(String),

    #[error("Subject must not be empty")]
    EmptySubject,

    #[error("Subject is {len} characters long (max {max})")]
    SubjectTooLong { len: usize, max: usize },

    #[error("Issue reference must contain digits only, got '{0}'")]
    InvalidIssueRef(String),
}

/// Errors from the interactive prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Io(#[source] std::io::Error),

    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => Self::Io(e),
        }
    }
}

/// Errors from resolving where to commit.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Not a git repository (or any parent): {0}")]
    NotARepository(#[source] git2::Error),

    #[error("Repository at {} has no working tree", .0.display())]
    BareRepository(PathBuf),

    #[error("Cannot use directory {}: {source}", path.display())]
    BadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
