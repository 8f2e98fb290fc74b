use crate::Choice;

/// Synchronous check run against a text answer before it is accepted.
///
/// Returns `Err(message)` with the text to show the user when the answer is rejected.
pub type Validator = fn(&str) -> Result<(), String>;

/// Configuration for a single-line text prompt.
#[derive(Debug, Clone)]
pub struct InputPrompt {
    /// Key identifying the answer, e.g. `author.name`.
    pub key: String,

    /// The message shown to the user.
    pub message: String,

    /// Answer used when the user submits an empty line.
    pub default: Option<String>,

    /// Optional validator for inline feedback.
    pub validate: Option<Validator>,
}

impl InputPrompt {
    /// Create a new text prompt without a default.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            default: None,
            validate: None,
        }
    }

    /// Set the default answer.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set a validator.
    pub fn with_validator(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Run the validator, if any. Answers are accepted when there is none.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self.validate {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }
}

/// Configuration for a single-select prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectPrompt {
    pub key: String,
    pub message: String,

    /// The available options, in display order.
    pub choices: Vec<Choice>,

    /// Index of the preselected option.
    pub default: Option<usize>,
}

impl SelectPrompt {
    pub fn new(key: impl Into<String>, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            choices,
            default: None,
        }
    }

    /// Preselect the option at `index`. Out-of-range indices are ignored.
    pub fn with_default(mut self, index: usize) -> Self {
        if index < self.choices.len() {
            self.default = Some(index);
        }
        self
    }

    /// Preselect the option whose value equals `value`, if there is one.
    pub fn with_default_value(mut self, value: &str) -> Self {
        self.default = Choice::position(&self.choices, value);
        self
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<String> {
        self.choices.iter().map(|c| c.label.clone()).collect()
    }
}

/// Configuration for a multi-select prompt (zero or more options).
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectPrompt {
    pub key: String,
    pub message: String,
    pub choices: Vec<Choice>,

    /// Indices of the options checked when the prompt opens.
    pub defaults: Vec<usize>,
}

impl MultiSelectPrompt {
    pub fn new(key: impl Into<String>, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            choices,
            defaults: Vec::new(),
        }
    }

    pub fn with_defaults(mut self, defaults: Vec<usize>) -> Self {
        self.defaults = defaults;
        self
    }

    /// One flag per choice, `true` when the choice starts checked.
    pub fn checked(&self) -> Vec<bool> {
        (0..self.choices.len())
            .map(|idx| self.defaults.contains(&idx))
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.choices.iter().map(|c| c.label.clone()).collect()
    }
}

/// Configuration for a yes/no prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmPrompt {
    pub key: String,
    pub message: String,

    /// `None` means the user has to answer explicitly.
    pub default: Option<bool>,
}

impl ConfirmPrompt {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn licenses() -> Vec<Choice> {
        vec![Choice::plain("MIT"), Choice::plain("ISC"), Choice::plain("GPL-3.0")]
    }

    #[test]
    fn input_without_validator_accepts_anything() {
        let prompt = InputPrompt::new("name", "What is your project name?");
        assert!(prompt.check("").is_ok());
        assert!(prompt.default.is_none());
    }

    #[test]
    fn input_validator_is_used() {
        fn not_empty(value: &str) -> Result<(), String> {
            if value.is_empty() {
                Err("empty".to_string())
            } else {
                Ok(())
            }
        }

        let prompt = InputPrompt::new("name", "Name?").with_validator(not_empty);
        assert_eq!(prompt.check(""), Err("empty".to_string()));
        assert!(prompt.check("x").is_ok());
    }

    #[test]
    fn select_default_by_value() {
        let prompt = SelectPrompt::new("license", "Please select a license", licenses())
            .with_default_value("ISC");
        assert_eq!(prompt.default, Some(1));

        let prompt = SelectPrompt::new("license", "Please select a license", licenses())
            .with_default_value("WTFPL");
        assert_eq!(prompt.default, None);
    }

    #[test]
    fn select_ignores_out_of_range_default() {
        let prompt = SelectPrompt::new("license", "License", licenses()).with_default(7);
        assert_eq!(prompt.default, None);
    }

    #[test]
    fn multi_select_checked_flags() {
        let prompt =
            MultiSelectPrompt::new("testPackages", "Which?", licenses()).with_defaults(vec![2]);
        assert_eq!(prompt.checked(), vec![false, false, true]);
    }

    #[test]
    fn confirm_defaults_to_explicit_answer() {
        let prompt = ConfirmPrompt::new("useGithub", "GitHub?");
        assert_eq!(prompt.default, None);
        assert_eq!(prompt.with_default(false).default, Some(false));
    }
}
