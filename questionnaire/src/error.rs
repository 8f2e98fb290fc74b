use questionnaire_types::PromptError;

/// Error type for questionnaire steps.
///
/// A step either returns a complete answer record or one of these; partially
/// answered steps are never handed back.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// The prompt backend failed or the user cancelled.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The backend returned an index outside the prompt's choices.
    #[error("Answer to '{key}' selected choice {index}, but only {len} choices exist")]
    UnknownChoice {
        key: String,
        index: usize,
        len: usize,
    },
}

impl QuestionnaireError {
    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Prompt(err) if err.is_cancelled())
    }
}
