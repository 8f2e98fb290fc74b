use std::path::{Path, PathBuf};

/// Message shown when the settings path does not point at anything on disk.
pub const SETTINGS_PATH_ERROR: &str =
    "You should introduce a real path for the create-nodejs-settings.json";

/// Turn a user-supplied path into an absolute one.
///
/// Expands a leading `~` to the home directory, then anchors relative paths
/// at the current directory. Anything else, `$` included, is taken literally.
/// Returns `None` for blank input or when the current directory cannot be read.
pub fn resolve_path(input: &str) -> Option<PathBuf> {
    if input.trim().is_empty() {
        return None;
    }

    let expanded = shellexpand::tilde(input);

    match std::path::absolute(Path::new(expanded.as_ref())) {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::debug!(%err, "could not make path absolute");
            None
        }
    }
}

/// Accept `input` only if it resolves to a path that currently exists.
pub fn validate_settings_path(input: &str) -> Result<PathBuf, String> {
    match resolve_path(input) {
        Some(path) if path.exists() => Ok(path),
        _ => Err(SETTINGS_PATH_ERROR.to_string()),
    }
}

/// [`Validator`](questionnaire_types::Validator)-shaped wrapper for prompt backends.
pub(crate) fn settings_path_validator(input: &str) -> Result<(), String> {
    validate_settings_path(input).map(|_| ())
}
