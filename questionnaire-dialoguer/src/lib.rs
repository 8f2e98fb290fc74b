//! # questionnaire-dialoguer
//!
//! Dialoguer prompter for the questionnaire crate.
//!
//! Questions are presented step-by-step in a classic CLI wizard style using the
//! `dialoguer` library, with a colorful or a plain theme.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire::Questionnaire;
//! use questionnaire_dialoguer::DialoguerPrompter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut questionnaire = Questionnaire::new(DialoguerPrompter::new());
//!     let remote = questionnaire.collect_git_remote_details()?;
//!     println!("Remote: {}", remote.git.ssh_url);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerPrompter};
