//! Scripted prompter for running questionnaires without user interaction.
//!
//! `ScriptedPrompter` answers prompts from a queue of canned answers, in order,
//! and records every prompt it was shown. This is useful for testing the
//! questionnaire steps and anything built on top of them.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Questionnaire, ScriptedPrompter};
//!
//! let prompter = ScriptedPrompter::new().with_text("octocat");
//! let mut questionnaire = Questionnaire::new(prompter);
//!
//! let answer = questionnaire.collect_github_user("someone-else").unwrap();
//! assert_eq!(answer.github.user, "octocat");
//! ```

use std::collections::VecDeque;

use questionnaire_types::{
    Choice, ConfirmPrompt, InputPrompt, MultiSelectPrompt, PromptError, Prompter, SelectPrompt,
};

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Type this text into an input prompt.
    Text(String),

    /// Submit without typing: take the default of an input, select or confirm prompt.
    AcceptDefault,

    /// Pick the choice at this index.
    Select(usize),

    /// Pick the choice carrying this value.
    Choose(String),

    /// Check the choices at these indices.
    MultiSelect(Vec<usize>),

    /// Check the choices carrying these values.
    ChooseMany(Vec<String>),

    /// Answer a yes/no prompt.
    Confirm(bool),

    /// Press Ctrl+C.
    Interrupt,
}

/// A prompt the scripted prompter was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedPrompt {
    pub key: String,
    pub message: String,
    /// Default as text: the default string, the default choice's value, or `true`/`false`.
    pub default: Option<String>,
}

/// Error type for `ScriptedPrompter`.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("No scripted answer left for '{0}'")]
    Exhausted(String),

    #[error("Scripted answer {answer:?} does not fit {kind} prompt '{key}'")]
    Mismatch {
        key: String,
        kind: &'static str,
        answer: ScriptedAnswer,
    },

    #[error("Prompt '{key}' has no choice with value '{value}'")]
    UnknownValue { key: String, value: String },

    #[error("Prompt '{0}' has no default to accept")]
    NoDefault(String),
}

/// A prompter that replays a fixed sequence of answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ScriptedAnswer>,
    asked: Vec<AskedPrompt>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer.
    pub fn with_answer(mut self, answer: ScriptedAnswer) -> Self {
        self.answers.push_back(answer);
        self
    }

    /// Queue typed text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_answer(ScriptedAnswer::Text(text.into()))
    }

    /// Queue an empty submission.
    pub fn accept_default(self) -> Self {
        self.with_answer(ScriptedAnswer::AcceptDefault)
    }

    /// Queue a selection by index.
    pub fn with_selection(self, index: usize) -> Self {
        self.with_answer(ScriptedAnswer::Select(index))
    }

    /// Queue a selection by value.
    pub fn with_choice(self, value: impl Into<String>) -> Self {
        self.with_answer(ScriptedAnswer::Choose(value.into()))
    }

    /// Queue a multi-selection by indices.
    pub fn with_selections(self, indices: Vec<usize>) -> Self {
        self.with_answer(ScriptedAnswer::MultiSelect(indices))
    }

    /// Queue a multi-selection by values.
    pub fn with_choices<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_answer(ScriptedAnswer::ChooseMany(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Queue a yes/no answer.
    pub fn with_confirm(self, value: bool) -> Self {
        self.with_answer(ScriptedAnswer::Confirm(value))
    }

    /// Queue a cancellation.
    pub fn interrupt(self) -> Self {
        self.with_answer(ScriptedAnswer::Interrupt)
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[AskedPrompt] {
        &self.asked
    }

    /// Validation messages shown so far, in order.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(
        &mut self,
        key: &str,
        message: &str,
        default: Option<String>,
    ) -> Result<ScriptedAnswer, PromptError> {
        self.asked.push(AskedPrompt {
            key: key.to_string(),
            message: message.to_string(),
            default,
        });
        match self.answers.pop_front() {
            Some(ScriptedAnswer::Interrupt) => Err(PromptError::Cancelled),
            Some(answer) => Ok(answer),
            None => Err(PromptError::backend(ScriptError::Exhausted(key.to_string()))),
        }
    }
}

fn mismatch(key: &str, kind: &'static str, answer: ScriptedAnswer) -> PromptError {
    PromptError::backend(ScriptError::Mismatch {
        key: key.to_string(),
        kind,
        answer,
    })
}

fn index_of(key: &str, choices: &[Choice], value: &str) -> Result<usize, PromptError> {
    Choice::position(choices, value).ok_or_else(|| {
        PromptError::backend(ScriptError::UnknownValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    })
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &InputPrompt) -> Result<String, PromptError> {
        match self.next_answer(&prompt.key, &prompt.message, prompt.default.clone())? {
            ScriptedAnswer::Text(text) if text.is_empty() => {
                Ok(prompt.default.clone().unwrap_or_default())
            }
            ScriptedAnswer::Text(text) => Ok(text),
            ScriptedAnswer::AcceptDefault => Ok(prompt.default.clone().unwrap_or_default()),
            other => Err(mismatch(&prompt.key, "input", other)),
        }
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize, PromptError> {
        let default = prompt
            .default
            .and_then(|idx| prompt.choices.get(idx))
            .map(|choice| choice.value.clone());

        match self.next_answer(&prompt.key, &prompt.message, default)? {
            // An index is passed through untouched, like a misbehaving backend would.
            ScriptedAnswer::Select(index) => Ok(index),
            ScriptedAnswer::Choose(value) => index_of(&prompt.key, &prompt.choices, &value),
            ScriptedAnswer::AcceptDefault => Ok(prompt.default.unwrap_or(0)),
            other => Err(mismatch(&prompt.key, "select", other)),
        }
    }

    fn multi_select(&mut self, prompt: &MultiSelectPrompt) -> Result<Vec<usize>, PromptError> {
        let default = (!prompt.defaults.is_empty()).then(|| {
            prompt
                .defaults
                .iter()
                .filter_map(|&idx| prompt.choices.get(idx))
                .map(|choice| choice.value.as_str())
                .collect::<Vec<_>>()
                .join(",")
        });

        match self.next_answer(&prompt.key, &prompt.message, default)? {
            ScriptedAnswer::MultiSelect(indices) => Ok(indices),
            ScriptedAnswer::ChooseMany(values) => values
                .iter()
                .map(|value| index_of(&prompt.key, &prompt.choices, value))
                .collect(),
            ScriptedAnswer::AcceptDefault => Ok(prompt.defaults.clone()),
            other => Err(mismatch(&prompt.key, "multi-select", other)),
        }
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError> {
        let default = prompt.default.map(|b| b.to_string());

        match self.next_answer(&prompt.key, &prompt.message, default)? {
            ScriptedAnswer::Confirm(value) => Ok(value),
            ScriptedAnswer::AcceptDefault => prompt
                .default
                .ok_or_else(|| PromptError::backend(ScriptError::NoDefault(prompt.key.clone()))),
            other => Err(mismatch(&prompt.key, "confirm", other)),
        }
    }

    fn report_invalid(&mut self, message: &str) {
        self.rejections.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_default() {
        let mut prompter = ScriptedPrompter::new().with_text("typed").accept_default();
        let prompt = InputPrompt::new("name", "Name?").with_default("fallback");

        assert_eq!(prompter.input(&prompt).unwrap(), "typed");
        assert_eq!(prompter.input(&prompt).unwrap(), "fallback");
        assert_eq!(prompter.remaining(), 0);
        assert_eq!(prompter.asked().len(), 2);
        assert_eq!(prompter.asked()[0].default.as_deref(), Some("fallback"));
    }

    #[test]
    fn empty_text_without_default_is_empty() {
        let mut prompter = ScriptedPrompter::new().with_text("");
        let prompt = InputPrompt::new("description", "Describe it");
        assert_eq!(prompter.input(&prompt).unwrap(), "");
    }

    #[test]
    fn select_by_value() {
        let mut prompter = ScriptedPrompter::new().with_choice("ISC");
        let prompt = SelectPrompt::new(
            "license",
            "License?",
            vec![Choice::plain("MIT"), Choice::plain("ISC")],
        );
        assert_eq!(prompter.select(&prompt).unwrap(), 1);
    }

    #[test]
    fn select_unknown_value_fails() {
        let mut prompter = ScriptedPrompter::new().with_choice("WTFPL");
        let prompt = SelectPrompt::new("license", "License?", vec![Choice::plain("MIT")]);
        let err = prompter.select(&prompt).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Backend error: Prompt 'license' has no choice with value 'WTFPL'"
        );
    }

    #[test]
    fn confirm_without_default_needs_answer() {
        let mut prompter = ScriptedPrompter::new().accept_default();
        let prompt = ConfirmPrompt::new("useGithub", "GitHub?");
        assert!(prompter.confirm(&prompt).is_err());
    }

    #[test]
    fn interrupt_cancels() {
        let mut prompter = ScriptedPrompter::new().interrupt();
        let prompt = InputPrompt::new("name", "Name?");
        assert!(prompter.input(&prompt).unwrap_err().is_cancelled());
    }

    #[test]
    fn exhausted_script_is_backend_error() {
        let mut prompter = ScriptedPrompter::new();
        let err = prompter.input(&InputPrompt::new("name", "Name?")).unwrap_err();
        assert!(!err.is_cancelled());
        assert_eq!(
            err.to_string(),
            "Backend error: No scripted answer left for 'name'"
        );
    }

    #[test]
    fn wrong_answer_kind_is_mismatch() {
        let mut prompter = ScriptedPrompter::new().with_confirm(true);
        let err = prompter.input(&InputPrompt::new("name", "Name?")).unwrap_err();
        assert!(err.to_string().contains("does not fit input prompt 'name'"));
    }

    #[test]
    fn rejections_are_recorded() {
        let mut prompter = ScriptedPrompter::new();
        prompter.report_invalid("nope");
        assert_eq!(prompter.rejections(), ["nope".to_string()]);
    }
}
