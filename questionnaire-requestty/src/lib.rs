//! Requestty prompter for the questionnaire crate.
//!
//! This crate asks the questionnaire's questions on the command line using the
//! `requestty` library.
//!
//! # Example
//!
//! ```ignore
//! use questionnaire::Questionnaire;
//! use questionnaire_requestty::RequesttyPrompter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut questionnaire = Questionnaire::new(RequesttyPrompter::new());
//!     let user = questionnaire.collect_github_user("octocat")?;
//!     println!("Hello, {}!", user.github.user);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::RequesttyError;
pub use backend::RequesttyPrompter;
