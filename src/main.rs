//! quill - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quill::commit::{
    CommitMessage, CommitOutcome, CommitType, SystemGit, execute_with, validate_issue_ref, validate_subject,
};
use quill::git::{check_git_installed, resolve_working_directory};
use quill::interactive::{PresetFields, confirm_commit, gather_fields};
use quill::settings::{commit_timeout, git_program};

/// Compose a conventional commit message and commit it with git.
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Compose a conventional commit message and commit it with git")]
#[command(version)]
struct Cli {
    /// Directory to commit in (defaults to the enclosing repository's work tree)
    #[arg(short = 'C', long = "dir")]
    dir: Option<PathBuf>,

    /// Commit type (feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert)
    #[arg(short = 't', long = "type")]
    commit_type: Option<CommitType>,

    /// Scope of the change
    #[arg(short, long)]
    scope: Option<String>,

    /// Short description; when given, scope and issue default to empty
    #[arg(short = 'm', long, value_parser = validate_subject)]
    subject: Option<String>,

    /// Issue number to reference in a `Resolves: #<issue>` footer
    #[arg(short, long, value_parser = validate_issue_ref)]
    issue: Option<String>,

    /// Commit without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Print the message without committing
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn preset(&self) -> PresetFields {
        // A subject on the command line means the optional fields are
        // meant to be empty unless given too.
        let optional_default = self.subject.as_ref().map(|_| String::new());

        PresetFields {
            commit_type: self.commit_type,
            scope: self.scope.clone().or_else(|| optional_default.clone()),
            subject: self.subject.clone(),
            issue_ref: self.issue.clone().or(optional_default),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // A dry run only composes, so it needs neither git nor a repository.
    if cli.dry_run {
        if let Some(message) = read_message(&cli)? {
            println!("{}", message);
        } else {
            println!("Cancelled.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Step 1: Check prerequisites
    let program = git_program();
    check_git_installed(&program)
        .await
        .context("git is required")?;

    // Step 2: Locate the working directory
    let start = std::env::current_dir().context("Failed to read current directory")?;
    let cwd = resolve_working_directory(cli.dir.as_deref(), &start)
        .context("Failed to locate a working directory")?;
    debug!("Committing in {}", cwd.display());

    // Step 3: Gather fields and compose
    let Some(message) = read_message(&cli)? else {
        println!("Cancelled.");
        return Ok(ExitCode::SUCCESS);
    };

    // Step 4: Confirm
    if !cli.yes && !confirm_commit(&message).context("Failed to read confirmation")? {
        println!("Aborted.");
        return Ok(ExitCode::SUCCESS);
    }

    // Step 5: Commit
    let git = SystemGit::new(program);
    let commit = execute_with(&git, &message, Some(&cwd));
    let outcome = match commit_timeout() {
        Some(limit) => tokio::time::timeout(limit, commit)
            .await
            .with_context(|| format!("git commit did not finish within {}s", limit.as_secs()))?,
        None => commit.await,
    }
    .context("Failed to run git commit")?;

    Ok(report(&outcome))
}

/// Gather the fields, prompting as needed, and compose the message.
fn read_message(cli: &Cli) -> Result<Option<CommitMessage>> {
    let fields = gather_fields(&cli.preset()).context("Failed to read commit details")?;
    Ok(fields.map(|f| f.compose()))
}

/// Print the outcome and pick the exit code.
fn report(outcome: &CommitOutcome) -> ExitCode {
    match outcome {
        CommitOutcome::Success(line) => println!("✓ {}", line),
        CommitOutcome::NothingToCommit => {
            eprintln!("⚠ Nothing to commit. Stage your changes with `git add` first.")
        }
        CommitOutcome::Failure(text) if text.is_empty() => {
            eprintln!("✗ Commit failed (git printed no output)")
        }
        CommitOutcome::Failure(text) => eprintln!("✗ Commit failed:\n{}", text.trim_end()),
    }

    ExitCode::from(exit_status(outcome))
}

/// Only a failed commit is an error; nothing to commit is a warning.
fn exit_status(outcome: &CommitOutcome) -> u8 {
    match outcome {
        CommitOutcome::Failure(_) => 1,
        CommitOutcome::Success(_) | CommitOutcome::NothingToCommit => 0,
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "quill=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "quill", "-C", "/tmp", "-t", "feat", "-s", "parser", "-m", "support nested arrays",
            "-i", "42", "--yes",
        ])
        .unwrap();

        assert_eq!(cli.commit_type, Some(CommitType::Feat));
        assert!(cli.yes);
        let fields = gather_fields(&cli.preset()).unwrap().unwrap();
        assert_eq!(
            fields.compose().as_str(),
            "feat:parser: support nested arrays\nResolves: #42"
        );
    }

    #[test]
    fn test_subject_flag_defaults_optional_fields() {
        let cli = Cli::try_parse_from(["quill", "-t", "fix", "-m", "typo"]).unwrap();
        let preset = cli.preset();
        assert!(preset.is_complete());
        assert_eq!(preset.scope.as_deref(), Some(""));
        assert_eq!(preset.issue_ref.as_deref(), Some(""));
    }

    #[test]
    fn test_no_subject_leaves_fields_open() {
        let cli = Cli::try_parse_from(["quill", "-t", "fix"]).unwrap();
        let preset = cli.preset();
        assert!(!preset.is_complete());
        assert_eq!(preset.scope, None);
    }

    #[test]
    fn test_cli_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["quill", "-t", "feature"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_issue() {
        assert!(Cli::try_parse_from(["quill", "-i", "#42"]).is_err());
    }

    #[test]
    fn test_cli_rejects_blank_subject() {
        assert!(Cli::try_parse_from(["quill", "-m", "   "]).is_err());
    }

    #[test]
    fn test_dry_run_composes_from_flags() {
        let cli = Cli::try_parse_from([
            "quill", "--dry-run", "-C", "/definitely/not/a/repo", "-t", "docs", "-m", "fix typo",
        ])
        .unwrap();

        assert!(cli.dry_run);
        let message = read_message(&cli).unwrap().unwrap();
        assert_eq!(message.as_str(), "docs:fix typo");
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(
            exit_status(&CommitOutcome::Success("[main abc123] feat:x".to_string())),
            0
        );
        assert_eq!(exit_status(&CommitOutcome::NothingToCommit), 0);
        assert_eq!(
            exit_status(&CommitOutcome::Failure("fatal: boom".to_string())),
            1
        );
        assert_eq!(exit_status(&CommitOutcome::Failure(String::new())), 1);
    }
}
