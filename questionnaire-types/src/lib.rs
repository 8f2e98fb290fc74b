//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for asking questions:
//! - `Choice` - One selectable option of a select or multi-select prompt
//! - `InputPrompt`, `SelectPrompt`, `MultiSelectPrompt`, `ConfirmPrompt` - Prompt descriptions
//! - `Prompter` trait - For implementing interactive (or scripted) backends
//! - `PromptError` - Cancellation and backend failures

mod choice;
pub use choice::Choice;

mod prompt;
pub use prompt::{ConfirmPrompt, InputPrompt, MultiSelectPrompt, SelectPrompt, Validator};

mod error;
pub use error::PromptError;

mod traits;
pub use traits::Prompter;
