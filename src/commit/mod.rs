//! Composing conventional commit messages and committing them with git.

pub mod executor;
pub mod fields;
pub mod message;

pub use executor::{
    CommitOutcome, GitOutput, GitRunner, SystemGit, classify, execute, execute_with,
};
pub use fields::{CommitFields, CommitType, MAX_SUBJECT_LEN, validate_issue_ref, validate_subject};
pub use message::{CommitMessage, compose};
