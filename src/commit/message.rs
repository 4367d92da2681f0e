//! Commit message composition.

use std::fmt;

/// Prefix of the optional footer line.
const FOOTER_PREFIX: &str = "Resolves: #";

/// A formatted commit message: one header line and an optional footer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The first line, `<type>:<scope: ><subject>`.
    pub fn header(&self) -> &str {
        self.0.split_once('\n').map_or(self.0.as_str(), |(h, _)| h)
    }

    /// The `Resolves: #<issue>` line, if an issue was referenced.
    pub fn footer(&self) -> Option<&str> {
        self.0.split_once('\n').map(|(_, f)| f)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compose a commit message from its parts.
///
/// Produces:
/// ```text
/// feat:parser: support nested arrays
/// Resolves: #42
/// ```
///
/// The colon follows the type with no space, and a non-empty scope is
/// rendered as `<scope>: ` right after it. Blank `scope` and `issue_ref` are
/// omitted. Callers must pass a recognised type and a non-empty subject.
pub fn compose(commit_type: &str, scope: &str, subject: &str, issue_ref: &str) -> CommitMessage {
    let scope = scope.trim();
    let subject = subject.trim();
    let issue_ref = issue_ref.trim();

    let mut message = format!("{commit_type}:");
    if !scope.is_empty() {
        message.push_str(scope);
        message.push_str(": ");
    }
    message.push_str(subject);

    if !issue_ref.is_empty() {
        message.push('\n');
        message.push_str(FOOTER_PREFIX);
        message.push_str(issue_ref);
    }

    CommitMessage(message)
}
