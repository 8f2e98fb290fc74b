//! Answer records returned by the questionnaire steps.
//!
//! Every record serializes with the key layout the scaffolding tool writes into
//! its generated files and settings, e.g. `projectURL` or `github.token`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::path::resolve_path;

/// Defaults offered by [`Questionnaire::collect_project_details`](crate::Questionnaire::collect_project_details).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDefaults {
    pub project_name: String,
    pub version: String,
    /// Value of the preselected license choice.
    pub license: String,
    pub git_user_name: String,
    pub git_user_email: String,
    /// Value of the preselected template choice.
    pub template: String,
}

/// Everything needed to scaffold the project itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub name: String,
    pub template: String,
    pub description: String,
    pub version: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub author: Author,
    pub is_private: bool,
    #[serde(rename = "projectURL")]
    pub project_url: String,
    pub test_packages: Vec<String>,
    pub use_github: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub url: String,
}

/// Where the project's git remote and issue tracker live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRemoteDetails {
    pub git: GitRemote,
    pub issue_tracker: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRemote {
    pub ssh_url: String,
}

/// Location of the settings file holding persisted GitHub credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFileLocation {
    /// The path as the user typed it (or the accepted default).
    pub settings_path: String,
}

impl SettingsFileLocation {
    /// Resolve the stored answer into an absolute path.
    pub fn resolve(&self) -> Option<PathBuf> {
        resolve_path(&self.settings_path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub github: GithubAccount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubAccount {
    pub user: String,
}

/// A GitHub personal access token, returned in plain text.
///
/// Redacting the token before display or logging is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubToken {
    pub github: GithubAuth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubAuth {
    pub user: String,
    pub token: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTokenConfirmation {
    pub update_token: bool,
}
