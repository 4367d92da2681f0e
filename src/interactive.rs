//! Interactive prompts for commit fields.
//!
//! Each step can be cancelled with Esc or Ctrl-C, which abandons the whole
//! flow. Fields already supplied on the command line skip their prompt.

use dialoguer::{Confirm, Input, Select};

use crate::commit::{CommitFields, CommitMessage, CommitType, validate_issue_ref, validate_subject};
use crate::error::PromptError;

/// Field values known before prompting, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct PresetFields {
    pub commit_type: Option<CommitType>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub issue_ref: Option<String>,
}

impl PresetFields {
    /// Whether every field is known and no prompt is needed.
    pub fn is_complete(&self) -> bool {
        self.commit_type.is_some()
            && self.scope.is_some()
            && self.subject.is_some()
            && self.issue_ref.is_some()
    }
}

/// Gather commit fields, prompting for whatever `preset` leaves open.
///
/// Returns `Ok(None)` if the user cancelled.
pub fn gather_fields(preset: &PresetFields) -> Result<Option<CommitFields>, PromptError> {
    let Some(commit_type) = preset_or(preset.commit_type, pick_type)? else {
        return Ok(None);
    };
    let Some(scope) = preset_or(preset.scope.clone(), ask_scope)? else {
        return Ok(None);
    };
    let Some(subject) = preset_or(preset.subject.clone(), ask_subject)? else {
        return Ok(None);
    };
    let Some(issue_ref) = preset_or(preset.issue_ref.clone(), ask_issue_ref)? else {
        return Ok(None);
    };

    let fields = CommitFields::new(commit_type, &scope, &subject, &issue_ref)?;
    Ok(Some(fields))
}

/// Show the composed message and ask whether to commit it.
///
/// Cancelling counts as "no".
pub fn confirm_commit(message: &CommitMessage) -> Result<bool, PromptError> {
    println!("\n{}\n", message);

    let answer = Confirm::new()
        .with_prompt("Commit with this message?")
        .default(true)
        .interact_opt()?;

    Ok(answer.unwrap_or(false))
}

/// Labels for the type picker, tag padded to a common width.
pub fn type_choices() -> Vec<String> {
    let width = CommitType::ALL
        .iter()
        .map(|t| t.as_str().len())
        .max()
        .unwrap_or(0);

    CommitType::ALL
        .iter()
        .map(|t| format!("{:<width$}  {}", t.as_str(), t.description()))
        .collect()
}

fn preset_or<T>(
    preset: Option<T>,
    ask: impl FnOnce() -> Result<Option<T>, PromptError>,
) -> Result<Option<T>, PromptError> {
    match preset {
        Some(value) => Ok(Some(value)),
        None => ask(),
    }
}

fn pick_type() -> Result<Option<CommitType>, PromptError> {
    let choices = type_choices();
    let picked = Select::new()
        .with_prompt("Select the type of change")
        .items(choices.as_slice())
        .default(0)
        .interact_opt()?;

    Ok(picked.and_then(|i| CommitType::ALL.get(i).copied()))
}

fn ask_scope() -> Result<Option<String>, PromptError> {
    text_step(
        Input::<String>::new()
            .with_prompt("Scope (optional)")
            .allow_empty(true)
            .interact_text(),
    )
}

fn ask_subject() -> Result<Option<String>, PromptError> {
    text_step(
        Input::<String>::new()
            .with_prompt("Short description")
            .validate_with(|input: &String| -> Result<(), String> {
                validate_subject(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text(),
    )
}

fn ask_issue_ref() -> Result<Option<String>, PromptError> {
    text_step(
        Input::<String>::new()
            .with_prompt("Issue number (optional)")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                validate_issue_ref(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text(),
    )
}

/// Text inputs have no cancel result; Ctrl-C surfaces as an interrupted read.
fn text_step(result: Result<String, dialoguer::Error>) -> Result<Option<String>, PromptError> {
    match result {
        Ok(text) => Ok(Some(text)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}
