//! The questionnaire steps.
//!
//! Each `collect_*` method asks a fixed, ordered set of questions and returns one
//! answer record. Steps share no state: the caller decides which ones to run and
//! in what order.

use questionnaire_types::{
    Choice, ConfirmPrompt, InputPrompt, MultiSelectPrompt, Prompter, SelectPrompt,
};

use crate::answers::{
    Author, GitRemote, GitRemoteDetails, GithubAccount, GithubAuth, GithubToken, GithubUser,
    ProjectDefaults, ProjectDetails, SettingsFileLocation, UpdateTokenConfirmation,
};
use crate::error::QuestionnaireError;
use crate::keywords::split_keywords;
use crate::path::{settings_path_validator, validate_settings_path};

/// Runs questionnaire steps against a [`Prompter`].
#[derive(Debug, Default, Clone)]
pub struct Questionnaire<P> {
    prompter: P,
}

impl<P: Prompter> Questionnaire<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Ask for the project's metadata.
    ///
    /// Questions, in order: name, template, description, version, keywords,
    /// license, author name, author email, author website, privacy, project
    /// website, test packages and whether to create a GitHub repository.
    pub fn collect_project_details(
        &mut self,
        defaults: &ProjectDefaults,
        licenses: &[Choice],
        test_packages: &[Choice],
        templates: &[Choice],
    ) -> Result<ProjectDetails, QuestionnaireError> {
        tracing::debug!(step = "project_details", "starting step");

        let name = self.text(suggesting(
            InputPrompt::new("name", "What is your project name?"),
            &defaults.project_name,
        ))?;

        let template = self.choose(
            SelectPrompt::new(
                "template",
                "What kind of project are you creating?",
                templates.to_vec(),
            )
            .with_default_value(&defaults.template),
        )?;

        let description = self.text(InputPrompt::new(
            "description",
            "How would you describe your project?",
        ))?;

        let version = self.text(suggesting(
            InputPrompt::new("version", "What version do you want to start with?"),
            &defaults.version,
        ))?;

        let keywords = split_keywords(&self.text(InputPrompt::new(
            "keywords",
            "Provide a comma-separated list of keywords:",
        ))?);

        let license = self.choose(
            SelectPrompt::new("license", "Please select a license", licenses.to_vec())
                .with_default_value(&defaults.license),
        )?;

        let author_name = self.text(suggesting(
            InputPrompt::new("author.name", "What is your name?"),
            &defaults.git_user_name,
        ))?;

        let author_email = self.text(suggesting(
            InputPrompt::new("author.email", "What is your email?"),
            &defaults.git_user_email,
        ))?;

        let author_url = self.text(InputPrompt::new("author.url", "What is your website?"))?;

        let is_private = self.prompter.confirm(
            &ConfirmPrompt::new("isPrivate", "Is this project private?").with_default(false),
        )?;

        let project_url = self.text(InputPrompt::new(
            "projectURL",
            "What is your project website?",
        ))?;

        let test_packages = self.choose_many(MultiSelectPrompt::new(
            "testPackages",
            "Which test packages do you want to include?",
            test_packages.to_vec(),
        ))?;

        let use_github = self.prompter.confirm(&ConfirmPrompt::new(
            "useGithub",
            "Would you like to create a GitHub repository?",
        ))?;

        tracing::debug!(step = "project_details", use_github, "step completed");

        Ok(ProjectDetails {
            name,
            template,
            description,
            version,
            keywords,
            license,
            author: Author {
                name: author_name,
                email: author_email,
                url: author_url,
            },
            is_private,
            project_url,
            test_packages,
            use_github,
        })
    }

    /// Ask for the git remote and the issue tracker.
    pub fn collect_git_remote_details(&mut self) -> Result<GitRemoteDetails, QuestionnaireError> {
        tracing::debug!(step = "git_remote_details", "starting step");

        let ssh_url = self.text(InputPrompt::new(
            "git.sshUrl",
            "What git remote will you be using?",
        ))?;
        let issue_tracker =
            self.text(InputPrompt::new("issueTracker", "Where is your issue tracker?"))?;

        Ok(GitRemoteDetails {
            git: GitRemote { ssh_url },
            issue_tracker,
        })
    }

    /// Ask where the settings file lives, until the answer points at an existing path.
    pub fn collect_settings_file_path(
        &mut self,
        default_path: &str,
    ) -> Result<SettingsFileLocation, QuestionnaireError> {
        tracing::debug!(step = "settings_file_path", "starting step");

        let prompt = suggesting(
            InputPrompt::new(
                "settingsPath",
                "What is the path for the create-nodejs-settings.json file?",
            ),
            default_path,
        )
        .with_validator(settings_path_validator);

        loop {
            let answer = self.prompter.input(&prompt)?;
            match validate_settings_path(&answer) {
                Ok(resolved) => {
                    tracing::debug!(path = %resolved.display(), "settings path accepted");
                    return Ok(SettingsFileLocation {
                        settings_path: answer,
                    });
                }
                Err(message) => {
                    tracing::warn!(%answer, "settings path rejected");
                    self.prompter.report_invalid(&message);
                }
            }
        }
    }

    /// Ask for the GitHub user, suggesting the one currently stored.
    pub fn collect_github_user(
        &mut self,
        current_user: &str,
    ) -> Result<GithubUser, QuestionnaireError> {
        tracing::debug!(step = "github_user", "starting step");

        let user = self.text(suggesting(
            InputPrompt::new("github.user", "What is your Github user?"),
            current_user,
        ))?;

        Ok(GithubUser {
            github: GithubAccount { user },
        })
    }

    /// Ask for `user`'s personal access token, suggesting the one currently stored.
    pub fn collect_auth_token(
        &mut self,
        user: &str,
        current_token: &str,
    ) -> Result<GithubToken, QuestionnaireError> {
        tracing::debug!(step = "auth_token", %user, "starting step");

        let token = self.text(suggesting(
            InputPrompt::new(
                "github.token",
                format!("What is your GitHub token for user {user}?"),
            ),
            current_token,
        ))?;

        Ok(GithubToken {
            github: GithubAuth {
                user: user.to_string(),
                token,
            },
        })
    }

    /// Ask whether the settings file should be updated with the new token.
    pub fn collect_update_token_confirmation(
        &mut self,
    ) -> Result<UpdateTokenConfirmation, QuestionnaireError> {
        tracing::debug!(step = "update_token", "starting step");

        let update_token = self.prompter.confirm(&ConfirmPrompt::new(
            "updateToken",
            "Do you want to update the settings file with this token?",
        ))?;

        Ok(UpdateTokenConfirmation { update_token })
    }

    fn text(&mut self, prompt: InputPrompt) -> Result<String, QuestionnaireError> {
        Ok(self.prompter.input(&prompt)?)
    }

    fn choose(&mut self, prompt: SelectPrompt) -> Result<String, QuestionnaireError> {
        let index = self.prompter.select(&prompt)?;
        choice_value(&prompt.key, &prompt.choices, index)
    }

    fn choose_many(&mut self, prompt: MultiSelectPrompt) -> Result<Vec<String>, QuestionnaireError> {
        self.prompter
            .multi_select(&prompt)?
            .into_iter()
            .map(|index| choice_value(&prompt.key, &prompt.choices, index))
            .collect()
    }
}

/// Attach `default` to the prompt unless it is blank.
fn suggesting(prompt: InputPrompt, default: &str) -> InputPrompt {
    if default.is_empty() {
        prompt
    } else {
        prompt.with_default(default)
    }
}

fn choice_value(key: &str, choices: &[Choice], index: usize) -> Result<String, QuestionnaireError> {
    choices
        .get(index)
        .map(|choice| choice.value.clone())
        .ok_or_else(|| QuestionnaireError::UnknownChoice {
            key: key.to_string(),
            index,
            len: choices.len(),
        })
}
