use std::fmt;

/// One option of a select or multi-select prompt.
///
/// The `label` is what the user sees, the `value` is what ends up in the answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// A choice whose label and value are the same text.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Find the position of the choice carrying `value`.
    pub fn position(choices: &[Choice], value: &str) -> Option<usize> {
        choices.iter().position(|choice| choice.value == value)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<(&str, &str)> for Choice {
    fn from((label, value): (&str, &str)) -> Self {
        Self::new(label, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_uses_value_as_label() {
        let choice = Choice::plain("jest");
        assert_eq!(choice.label, "jest");
        assert_eq!(choice.value, "jest");
    }

    #[test]
    fn position_matches_value_not_label() {
        let choices = vec![
            Choice::new("MIT License", "MIT"),
            Choice::new("Apache 2.0", "Apache-2.0"),
        ];
        assert_eq!(Choice::position(&choices, "Apache-2.0"), Some(1));
        assert_eq!(Choice::position(&choices, "MIT License"), None);
    }

    #[test]
    fn display_shows_label() {
        let choice: Choice = ("Node module", "node-module").into();
        assert_eq!(choice.to_string(), "Node module");
    }
}
