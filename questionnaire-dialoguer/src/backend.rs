//! Dialoguer implementation of the `Prompter` trait.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use questionnaire::{
    ConfirmPrompt, InputPrompt, MultiSelectPrompt, PromptError, Prompter, SelectPrompt,
};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the prompt (e.g., pressed Ctrl+C or Escape).
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for PromptError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => {
                tracing::debug!("dialoguer prompt interrupted");
                PromptError::Cancelled
            }
            other => PromptError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn classify(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer backend for interactive CLI prompts.
///
/// This backend uses the `dialoguer` library to present questions
/// to the user in a command-line interface with colorful themes.
#[derive(Debug, Clone)]
pub struct DialoguerPrompter {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPrompter {
    /// Create a new Dialoguer prompter with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a prompter with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn ask_input(&self, prompt: &InputPrompt) -> Result<String, DialoguerError> {
        let theme = self.theme();
        let mut builder: Input<String> = Input::with_theme(&*theme)
            .with_prompt(prompt.message.as_str())
            .allow_empty(true);

        if let Some(default) = &prompt.default {
            builder = builder.default(default.clone());
        }

        if let Some(validate) = prompt.validate {
            builder = builder.validate_with(move |value: &String| validate(value));
        }

        builder.interact_text().map_err(classify)
    }

    fn ask_select(&self, prompt: &SelectPrompt) -> Result<usize, DialoguerError> {
        let theme = self.theme();
        let items = prompt.labels();
        let mut builder = Select::with_theme(&*theme)
            .with_prompt(prompt.message.as_str())
            .items(&items);

        if let Some(default_idx) = prompt.default {
            builder = builder.default(default_idx);
        }

        builder.interact().map_err(classify)
    }

    fn ask_multi_select(&self, prompt: &MultiSelectPrompt) -> Result<Vec<usize>, DialoguerError> {
        let theme = self.theme();
        let items = prompt.labels();
        let checked = prompt.checked();

        MultiSelect::with_theme(&*theme)
            .with_prompt(prompt.message.as_str())
            .items(&items)
            .defaults(&checked)
            .interact()
            .map_err(classify)
    }

    fn ask_confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, DialoguerError> {
        let theme = self.theme();
        let mut builder = Confirm::with_theme(&*theme).with_prompt(prompt.message.as_str());

        if let Some(default) = prompt.default {
            builder = builder.default(default);
        }

        builder.interact().map_err(classify)
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &InputPrompt) -> Result<String, PromptError> {
        Ok(self.ask_input(prompt)?)
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize, PromptError> {
        Ok(self.ask_select(prompt)?)
    }

    fn multi_select(&mut self, prompt: &MultiSelectPrompt) -> Result<Vec<usize>, PromptError> {
        Ok(self.ask_multi_select(prompt)?)
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError> {
        Ok(self.ask_confirm(prompt)?)
    }

    fn report_invalid(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }
}
