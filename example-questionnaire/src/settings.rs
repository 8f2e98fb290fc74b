//! The settings file holding GitHub credentials between runs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use questionnaire::GithubAuth;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE_NAME: &str = "create-nodejs-settings.json";

/// Contents of `create-nodejs-settings.json`.
///
/// Keys other than `github` are kept as they are when the file is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub github: GithubAuth,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// The settings file for an accepted settings location.
///
/// A directory gets the file name appended, anything else is taken as the file itself.
pub fn settings_file(location: &Path) -> PathBuf {
    if location.is_dir() {
        location.join(SETTINGS_FILE_NAME)
    } else {
        location.to_path_buf()
    }
}

/// Read the settings, treating a missing file as empty credentials.
pub fn load(path: &Path) -> anyhow::Result<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file yet");
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse settings in {}", path.display()))
}

pub fn save(path: &Path, settings: &Settings) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, raw + "\n")
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    tracing::info!(path = %path.display(), "settings file updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_gets_file_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(settings_file(dir.path()), dir.path().join(SETTINGS_FILE_NAME));

        let file = dir.path().join("custom.json");
        fs::write(&file, "{}").unwrap();
        assert_eq!(settings_file(&file), file);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_credentials_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "github": { "user": "octocat" } }"#).unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.github.user, "octocat");
        assert_eq!(settings.github.token, "");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse settings"));
    }

    #[test]
    fn save_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(
            &path,
            r#"{ "github": { "user": "octocat", "token": "old" }, "editor": "vim" }"#,
        )
        .unwrap();

        let mut settings = load(&path).unwrap();
        settings.github.token = "new".to_string();
        save(&path, &settings).unwrap();

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded.github.token, "new");
        assert_eq!(reloaded.other["editor"], "vim");
    }
}
