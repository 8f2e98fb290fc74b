//! # questionnaire
//!
//! Interactive questionnaire for scaffolding new projects. Backend-agnostic.
//!
//! The questionnaire asks for project metadata, the git remote, and the GitHub
//! credentials needed to create a repository. Each step is a method on
//! [`Questionnaire`] returning a typed answer record; the caller decides which
//! steps to run.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Choice, ProjectDefaults, Questionnaire, ScriptedPrompter};
//!
//! let licenses = vec![Choice::plain("MIT"), Choice::plain("ISC")];
//! let templates = vec![Choice::new("Node module", "node-module")];
//! let test_packages = vec![Choice::plain("jest"), Choice::plain("mocha")];
//!
//! let defaults = ProjectDefaults {
//!     project_name: "my-app".into(),
//!     version: "1.0.0".into(),
//!     license: "MIT".into(),
//!     template: "node-module".into(),
//!     ..Default::default()
//! };
//!
//! let prompter = ScriptedPrompter::new()
//!     .accept_default() // name
//!     .accept_default() // template
//!     .with_text("A small app") // description
//!     .accept_default() // version
//!     .with_text("cli,tool") // keywords
//!     .with_choice("ISC") // license
//!     .with_text("Jane") // author name
//!     .with_text("jane@example.com") // author email
//!     .with_text("") // author website
//!     .accept_default() // private?
//!     .with_text("") // project website
//!     .with_choices(["jest"]) // test packages
//!     .with_confirm(false); // GitHub?
//!
//! let details = Questionnaire::new(prompter)
//!     .collect_project_details(&defaults, &licenses, &test_packages, &templates)
//!     .unwrap();
//!
//! assert_eq!(details.name, "my-app");
//! assert_eq!(details.license, "ISC");
//! assert_eq!(details.keywords, vec!["cli", "tool"]);
//! assert!(!details.use_github);
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement [`Prompter`]:
//! - `questionnaire-requestty` - CLI prompts via requestty
//! - `questionnaire-dialoguer` - CLI prompts via dialoguer
//!
//! [`ScriptedPrompter`] replays canned answers for tests.

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod answers;
pub use answers::{
    Author, GitRemote, GitRemoteDetails, GithubAccount, GithubAuth, GithubToken, GithubUser,
    ProjectDefaults, ProjectDetails, SettingsFileLocation, UpdateTokenConfirmation,
};

mod error;
pub use error::QuestionnaireError;

mod flow;
pub use flow::Questionnaire;

mod keywords;
pub use keywords::split_keywords;

mod path;
pub use path::{SETTINGS_PATH_ERROR, resolve_path, validate_settings_path};

// Scripted prompter for running steps without user interaction
mod scripted;
pub use scripted::{AskedPrompt, ScriptError, ScriptedAnswer, ScriptedPrompter};
