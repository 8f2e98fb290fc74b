//! Requestty implementation of the `Prompter` trait.

use questionnaire::{
    ConfirmPrompt, InputPrompt, MultiSelectPrompt, PromptError, Prompter, SelectPrompt,
};
use thiserror::Error;

/// Error type for the Requestty backend.
#[derive(Debug, Error)]
pub enum RequesttyError {
    /// User cancelled the prompt (e.g., pressed Ctrl+C).
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// An error occurred during prompting.
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Unexpected answer type received.
    #[error("Unexpected answer type: expected {expected}, got {got}")]
    UnexpectedAnswerType { expected: String, got: String },
}

impl From<requestty::ErrorKind> for RequesttyError {
    fn from(err: requestty::ErrorKind) -> Self {
        match err {
            requestty::ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::PromptError(err.to_string()),
        }
    }
}

impl From<RequesttyError> for PromptError {
    fn from(err: RequesttyError) -> Self {
        match err {
            RequesttyError::Cancelled => {
                tracing::debug!("requestty prompt interrupted");
                PromptError::Cancelled
            }
            other => PromptError::backend(other),
        }
    }
}

/// Requestty backend for interactive CLI prompts.
///
/// This backend uses the `requestty` library to present questions
/// to the user in a command-line interface.
#[derive(Debug, Default, Clone)]
pub struct RequesttyPrompter;

impl RequesttyPrompter {
    /// Create a new Requestty prompter.
    pub const fn new() -> Self {
        Self
    }
}

pub(crate) fn input_question(prompt: &InputPrompt) -> requestty::Question<'static> {
    let mut q = requestty::Question::input(prompt.key.clone()).message(prompt.message.clone());

    if let Some(default) = &prompt.default {
        q = q.default(default.clone());
    }

    match prompt.validate {
        Some(validate) => q
            .validate(move |value: &str, _: &requestty::Answers| validate(value))
            .build(),
        None => q.build(),
    }
}

pub(crate) fn select_question(prompt: &SelectPrompt) -> requestty::Question<'static> {
    let mut q = requestty::Question::select(prompt.key.clone())
        .message(prompt.message.clone())
        .choices(prompt.labels());

    if let Some(default_idx) = prompt.default {
        q = q.default(default_idx);
    }

    q.build()
}

pub(crate) fn multi_select_question(prompt: &MultiSelectPrompt) -> requestty::Question<'static> {
    let choices: Vec<(String, bool)> = prompt
        .labels()
        .into_iter()
        .zip(prompt.checked())
        .collect();

    requestty::Question::multi_select(prompt.key.clone())
        .message(prompt.message.clone())
        .choices_with_default(choices)
        .build()
}

pub(crate) fn confirm_question(prompt: &ConfirmPrompt) -> requestty::Question<'static> {
    let mut q = requestty::Question::confirm(prompt.key.clone()).message(prompt.message.clone());

    if let Some(default) = prompt.default {
        q = q.default(default);
    }

    q.build()
}

fn unexpected(expected: &str, got: &requestty::Answer) -> RequesttyError {
    RequesttyError::UnexpectedAnswerType {
        expected: expected.to_string(),
        got: format!("{got:?}"),
    }
}

pub(crate) fn expect_string(answer: requestty::Answer) -> Result<String, RequesttyError> {
    match answer {
        requestty::Answer::String(s) => Ok(s),
        other => Err(unexpected("String", &other)),
    }
}

pub(crate) fn expect_list_item(answer: requestty::Answer) -> Result<usize, RequesttyError> {
    match answer {
        requestty::Answer::ListItem(item) => Ok(item.index),
        other => Err(unexpected("ListItem", &other)),
    }
}

pub(crate) fn expect_list_items(answer: requestty::Answer) -> Result<Vec<usize>, RequesttyError> {
    match answer {
        requestty::Answer::ListItems(items) => Ok(items.iter().map(|item| item.index).collect()),
        other => Err(unexpected("ListItems", &other)),
    }
}

pub(crate) fn expect_bool(answer: requestty::Answer) -> Result<bool, RequesttyError> {
    match answer {
        requestty::Answer::Bool(b) => Ok(b),
        other => Err(unexpected("Bool", &other)),
    }
}

fn ask(question: requestty::Question<'_>) -> Result<requestty::Answer, RequesttyError> {
    Ok(requestty::prompt_one(question)?)
}

impl Prompter for RequesttyPrompter {
    fn input(&mut self, prompt: &InputPrompt) -> Result<String, PromptError> {
        Ok(ask(input_question(prompt)).and_then(expect_string)?)
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize, PromptError> {
        Ok(ask(select_question(prompt)).and_then(expect_list_item)?)
    }

    fn multi_select(&mut self, prompt: &MultiSelectPrompt) -> Result<Vec<usize>, PromptError> {
        Ok(ask(multi_select_question(prompt)).and_then(expect_list_items)?)
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError> {
        Ok(ask(confirm_question(prompt)).and_then(expect_bool)?)
    }

    fn report_invalid(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }
}
