//! Environment-driven settings for the quill binary.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Environment variable naming the git program to run.
pub const GIT_PROGRAM_ENV_VAR: &str = "QUILL_GIT";

/// Environment variable bounding how long a commit may run, in seconds.
pub const TIMEOUT_ENV_VAR: &str = "QUILL_COMMIT_TIMEOUT";

const DEFAULT_GIT_PROGRAM: &str = "git";

/// Get the git program to run.
///
/// Reads from QUILL_GIT if set and non-empty, otherwise `git`.
pub fn git_program() -> String {
    match env::var(GIT_PROGRAM_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => DEFAULT_GIT_PROGRAM.to_string(),
    }
}

/// Get the configured commit timeout.
///
/// Reads from QUILL_COMMIT_TIMEOUT. Unset means wait for git indefinitely.
/// Logs a warning and ignores the variable if it is not a positive number
/// of seconds.
pub fn commit_timeout() -> Option<Duration> {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                warn!("Invalid {} value '{}', waiting without a timeout", TIMEOUT_ENV_VAR, v);
                None
            }
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_program_default() {
        temp_env::with_var_unset(GIT_PROGRAM_ENV_VAR, || {
            assert_eq!(git_program(), "git");
        });
    }

    #[test]
    fn test_git_program_from_env() {
        temp_env::with_var(GIT_PROGRAM_ENV_VAR, Some("/opt/git/bin/git"), || {
            assert_eq!(git_program(), "/opt/git/bin/git");
        });
    }

    #[test]
    fn test_git_program_blank_env_uses_default() {
        temp_env::with_var(GIT_PROGRAM_ENV_VAR, Some("  "), || {
            assert_eq!(git_program(), "git");
        });
    }

    #[test]
    fn test_commit_timeout_default() {
        temp_env::with_var_unset(TIMEOUT_ENV_VAR, || {
            assert_eq!(commit_timeout(), None);
        });
    }

    #[test]
    fn test_commit_timeout_from_env() {
        temp_env::with_var(TIMEOUT_ENV_VAR, Some("60"), || {
            assert_eq!(commit_timeout(), Some(Duration::from_secs(60)));
        });
    }

    #[test]
    fn test_commit_timeout_invalid_env_ignored() {
        temp_env::with_var(TIMEOUT_ENV_VAR, Some("not_a_number"), || {
            assert_eq!(commit_timeout(), None);
        });
    }

    #[test]
    fn test_commit_timeout_zero_ignored() {
        temp_env::with_var(TIMEOUT_ENV_VAR, Some("0"), || {
            assert_eq!(commit_timeout(), None);
        });
    }
}
