//! Conventional commit types and validated commit fields.

use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

use super::message::{CommitMessage, compose};

/// Maximum subject length, in characters.
pub const MAX_SUBJECT_LEN: usize = 100;

/// Conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    /// Every type, in the order the type picker lists them.
    pub const ALL: [CommitType; 11] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Build,
        Self::Ci,
        Self::Chore,
        Self::Revert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Revert => "revert",
        }
    }

    /// One-line description shown next to the tag when picking a type.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Feat => "A new feature",
            Self::Fix => "A bug fix",
            Self::Docs => "Documentation only changes",
            Self::Style => "Formatting, whitespace, missing semicolons",
            Self::Refactor => "A change that neither fixes a bug nor adds a feature",
            Self::Perf => "A change that improves performance",
            Self::Test => "Adding or correcting tests",
            Self::Build => "Build system or external dependency changes",
            Self::Ci => "CI configuration changes",
            Self::Chore => "Other changes that don't touch src or tests",
            Self::Revert => "Reverts a previous commit",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| FieldError::UnknownType(s.to_string()))
    }
}

/// Structured input for one commit message.
///
/// Built through [`CommitFields::new`], which enforces the shape the
/// composer relies on: a non-empty bounded subject and a digits-only issue
/// reference. Empty `scope` and `issue_ref` mean "omit".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFields {
    commit_type: CommitType,
    scope: String,
    subject: String,
    issue_ref: String,
}

impl CommitFields {
    pub fn new(
        commit_type: CommitType,
        scope: &str,
        subject: &str,
        issue_ref: &str,
    ) -> Result<Self, FieldError> {
        let subject = validate_subject(subject)?;
        let issue_ref = validate_issue_ref(issue_ref)?;

        Ok(Self {
            commit_type,
            scope: scope.trim().to_string(),
            subject,
            issue_ref,
        })
    }

    pub fn commit_type(&self) -> CommitType {
        self.commit_type
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issue_ref(&self) -> &str {
        &self.issue_ref
    }

    /// Compose the commit message for these fields.
    pub fn compose(&self) -> CommitMessage {
        compose(
            self.commit_type.as_str(),
            &self.scope,
            &self.subject,
            &self.issue_ref,
        )
    }
}

/// Check a subject and return it trimmed.
pub fn validate_subject(subject: &str) -> Result<String, FieldError> {
    let trimmed = subject.trim();
    if trimmed.is_empty() {
        return Err(FieldError::EmptySubject);
    }

    let len = trimmed.chars().count();
    if len > MAX_SUBJECT_LEN {
        return Err(FieldError::SubjectTooLong {
            len,
            max: MAX_SUBJECT_LEN,
        });
    }

    Ok(trimmed.to_string())
}

/// Check an issue reference and return it trimmed. Blank input is allowed.
pub fn validate_issue_ref(issue_ref: &str) -> Result<String, FieldError> {
    let trimmed = issue_ref.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let re = regex_lite::Regex::new(r"^\d+$").expect("issue ref pattern is valid");
    if !re.is_match(trimmed) {
        return Err(FieldError::InvalidIssueRef(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}
