//! Sequencing of the questionnaire steps for a new project.

use std::path::PathBuf;

use anyhow::Context;
use questionnaire::{
    Choice, GitRemoteDetails, ProjectDefaults, ProjectDetails, Prompter, Questionnaire,
};
use serde::Serialize;

use crate::settings;

/// What the scaffolder goes on to build from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub project: ProjectDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<GitRemoteDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubSetup>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSetup {
    pub settings_file: PathBuf,
    pub user: String,
    /// Redacted; the real token never leaves the settings file.
    pub token: String,
    pub settings_updated: bool,
}

pub fn licenses() -> Vec<Choice> {
    vec![
        Choice::new("MIT License", "MIT"),
        Choice::new("ISC License", "ISC"),
        Choice::new("Apache License 2.0", "Apache-2.0"),
        Choice::new("GNU GPLv3", "GPL-3.0"),
        Choice::new("Unlicensed (private)", "UNLICENSED"),
    ]
}

pub fn test_packages() -> Vec<Choice> {
    ["jest", "mocha", "chai", "sinon", "ava"]
        .into_iter()
        .map(Choice::plain)
        .collect()
}

pub fn templates() -> Vec<Choice> {
    vec![
        Choice::new("Node.js module", "node-module"),
        Choice::new("Express API", "express-api"),
        Choice::new("Command-line tool", "cli"),
    ]
}

/// Defaults derived from the working directory and the git author environment.
pub fn project_defaults() -> anyhow::Result<ProjectDefaults> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let project_name = cwd
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ProjectDefaults {
        project_name,
        version: "1.0.0".to_string(),
        license: "MIT".to_string(),
        git_user_name: std::env::var("GIT_AUTHOR_NAME").unwrap_or_default(),
        git_user_email: std::env::var("GIT_AUTHOR_EMAIL").unwrap_or_default(),
        template: templates()
            .first()
            .map(|template| template.value.clone())
            .unwrap_or_default(),
    })
}

/// Ask everything needed to scaffold a project.
///
/// Projects without a GitHub repository get asked for their git remote; projects
/// with one go through the stored-credentials flow instead.
pub fn run<P: Prompter>(
    questionnaire: &mut Questionnaire<P>,
    defaults: &ProjectDefaults,
    settings_dir: &str,
) -> anyhow::Result<Summary> {
    let project = questionnaire.collect_project_details(
        defaults,
        &licenses(),
        &test_packages(),
        &templates(),
    )?;

    let (remote, github) = if project.use_github {
        (None, Some(github_setup(questionnaire, settings_dir)?))
    } else {
        (Some(questionnaire.collect_git_remote_details()?), None)
    };

    Ok(Summary {
        project,
        remote,
        github,
    })
}

fn github_setup<P: Prompter>(
    questionnaire: &mut Questionnaire<P>,
    settings_dir: &str,
) -> anyhow::Result<GithubSetup> {
    let location = questionnaire.collect_settings_file_path(settings_dir)?;
    let resolved = location
        .resolve()
        .with_context(|| format!("Settings path {} no longer resolves", location.settings_path))?;
    let settings_file = settings::settings_file(&resolved);
    let mut stored = settings::load(&settings_file)?;

    let user = questionnaire.collect_github_user(&stored.github.user)?;
    let token = questionnaire.collect_auth_token(&user.github.user, &stored.github.token)?;

    let mut settings_updated = false;
    if token.github != stored.github
        && questionnaire
            .collect_update_token_confirmation()?
            .update_token
    {
        stored.github = token.github.clone();
        settings::save(&settings_file, &stored)?;
        settings_updated = true;
    }

    Ok(GithubSetup {
        settings_file,
        user: token.github.user,
        token: redact(&token.github.token),
        settings_updated,
    })
}

/// Hide all but the last four characters of a token.
pub fn redact(token: &str) -> String {
    let count = token.chars().count();
    if count <= 8 {
        return "*".repeat(count);
    }
    let visible: String = token.chars().skip(count - 4).collect();
    format!("{}{visible}", "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use questionnaire::ScriptedPrompter;

    use super::*;

    fn defaults() -> ProjectDefaults {
        ProjectDefaults {
            project_name: "widget".to_string(),
            version: "1.0.0".to_string(),
            license: "MIT".to_string(),
            git_user_name: "Jane".to_string(),
            git_user_email: "jane@example.com".to_string(),
            template: "node-module".to_string(),
        }
    }

    fn project_answers(use_github: bool) -> ScriptedPrompter {
        let mut prompter = ScriptedPrompter::new();
        for _ in 0..12 {
            prompter = prompter.accept_default();
        }
        prompter.with_confirm(use_github)
    }

    #[test]
    fn redacts_tokens() {
        assert_eq!(redact(""), "");
        assert_eq!(redact("short"), "*****");
        assert_eq!(redact("ghp_abcdefgh1234"), "************1234");
    }

    #[test]
    fn without_github_asks_for_remote() {
        let prompter = project_answers(false)
            .with_text("git@example.com:jane/widget.git")
            .with_text("https://example.com/issues");
        let mut questionnaire = Questionnaire::new(prompter);

        let summary = run(&mut questionnaire, &defaults(), "~").unwrap();

        assert_eq!(summary.project.name, "widget");
        assert!(summary.github.is_none());
        let remote = summary.remote.unwrap();
        assert_eq!(remote.git.ssh_url, "git@example.com:jane/widget.git");
        assert_eq!(questionnaire.prompter().remaining(), 0);
    }

    #[test]
    fn with_github_reuses_stored_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(settings::SETTINGS_FILE_NAME);
        fs::write(
            &file,
            r#"{ "github": { "user": "octocat", "token": "ghp_stored_token" } }"#,
        )
        .unwrap();

        // settings path, user, token: all defaults, so no update question
        let prompter = project_answers(true)
            .accept_default()
            .accept_default()
            .accept_default();
        let mut questionnaire = Questionnaire::new(prompter);

        let summary = run(
            &mut questionnaire,
            &defaults(),
            &dir.path().to_string_lossy(),
        )
        .unwrap();

        assert!(summary.remote.is_none());
        let github = summary.github.unwrap();
        assert_eq!(github.user, "octocat");
        assert_eq!(github.settings_file, file);
        assert!(!github.settings_updated);
        assert_eq!(github.token, "************oken");
        assert_eq!(questionnaire.prompter().remaining(), 0);
    }

    #[test]
    fn with_github_saves_new_token_when_confirmed() {
        let dir = tempfile::tempdir().unwrap();

        let prompter = project_answers(true)
            .accept_default()
            .with_text("octocat")
            .with_text("ghp_fresh_token")
            .with_confirm(true);
        let mut questionnaire = Questionnaire::new(prompter);

        let summary = run(
            &mut questionnaire,
            &defaults(),
            &dir.path().to_string_lossy(),
        )
        .unwrap();
        assert!(summary.github.unwrap().settings_updated);

        let stored = settings::load(&dir.path().join(settings::SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(stored.github.user, "octocat");
        assert_eq!(stored.github.token, "ghp_fresh_token");
    }

    #[test]
    fn declined_update_leaves_settings_alone() {
        let dir = tempfile::tempdir().unwrap();

        let prompter = project_answers(true)
            .accept_default()
            .with_text("octocat")
            .with_text("ghp_fresh_token")
            .with_confirm(false);
        let mut questionnaire = Questionnaire::new(prompter);

        let summary = run(
            &mut questionnaire,
            &defaults(),
            &dir.path().to_string_lossy(),
        )
        .unwrap();

        assert!(!summary.github.unwrap().settings_updated);
        assert!(!dir.path().join(settings::SETTINGS_FILE_NAME).exists());
    }

    #[test]
    fn summary_serializes_without_empty_sections() {
        let prompter = project_answers(false).with_text("r").with_text("i");
        let summary = run(&mut Questionnaire::new(prompter), &defaults(), "~").unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("github").is_none());
        assert_eq!(json["remote"]["git"]["sshUrl"], "r");
        assert_eq!(json["project"]["license"], "MIT");
    }
}
