//! quill - A CLI tool that composes conventional commit messages and commits them.
//!
//! # Overview
//!
//! quill builds a `<type>:<scope: ><subject>` header with an optional
//! `Resolves: #<issue>` footer from structured fields, then feeds it to
//! `git commit -F -` and classifies what git did with it.

pub mod commit;
pub mod error;
pub mod git;
pub mod interactive;
pub mod settings;

// Re-export commonly used types
pub use commit::{CommitFields, CommitMessage, CommitOutcome, CommitType, compose, execute};
pub use error::{CommitError, ConfigError, FieldError, PromptError};
