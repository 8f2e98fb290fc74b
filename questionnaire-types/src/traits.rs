use crate::{ConfirmPrompt, InputPrompt, MultiSelectPrompt, PromptError, SelectPrompt};

/// Trait for backends that put questions in front of a user.
///
/// There is one method per prompt kind. Each call blocks until the user answers
/// (or cancels). Backends guarantee type-correct answers: a confirm always yields
/// a bool, a select always yields an index.
pub trait Prompter {
    /// Ask for a line of text.
    ///
    /// An empty submission yields the prompt's default when there is one,
    /// and the empty string otherwise.
    fn input(&mut self, prompt: &InputPrompt) -> Result<String, PromptError>;

    /// Ask the user to pick exactly one choice. Returns its index.
    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize, PromptError>;

    /// Ask the user to pick zero or more choices. Returns their indices.
    fn multi_select(&mut self, prompt: &MultiSelectPrompt) -> Result<Vec<usize>, PromptError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError>;

    /// Show why the previous answer was rejected, before it is asked again.
    fn report_invalid(&mut self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn input(&mut self, prompt: &InputPrompt) -> Result<String, PromptError> {
        (**self).input(prompt)
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize, PromptError> {
        (**self).select(prompt)
    }

    fn multi_select(&mut self, prompt: &MultiSelectPrompt) -> Result<Vec<usize>, PromptError> {
        (**self).multi_select(prompt)
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError> {
        (**self).confirm(prompt)
    }

    fn report_invalid(&mut self, message: &str) {
        (**self).report_invalid(message);
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn input(&mut self, prompt: &InputPrompt) -> Result<String, PromptError> {
        (**self).input(prompt)
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize, PromptError> {
        (**self).select(prompt)
    }

    fn multi_select(&mut self, prompt: &MultiSelectPrompt) -> Result<Vec<usize>, PromptError> {
        (**self).multi_select(prompt)
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError> {
        (**self).confirm(prompt)
    }

    fn report_invalid(&mut self, message: &str) {
        (**self).report_invalid(message);
    }
}
