use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use questionnaire::{Prompter, Questionnaire, QuestionnaireError};
use questionnaire_dialoguer::DialoguerPrompter;
use questionnaire_requestty::RequesttyPrompter;
use tracing_subscriber::EnvFilter;

mod scaffold;
mod settings;

#[derive(Parser)]
#[command(author, version, about = "Answer a few questions to scaffold a new project", long_about = None)]
struct Cli {
    /// Prompt library used to ask the questions
    #[arg(long, value_enum, default_value_t = Backend::Requestty)]
    backend: Backend,

    /// Disable colors (dialoguer backend only)
    #[arg(long)]
    plain: bool,

    /// Suggested location of create-nodejs-settings.json
    #[arg(long, default_value = "~")]
    settings_dir: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    Requestty,
    Dialoguer,
}

fn prompter(cli: &Cli) -> Box<dyn Prompter> {
    match cli.backend {
        Backend::Requestty => Box::new(RequesttyPrompter::new()),
        Backend::Dialoguer if cli.plain => Box::new(DialoguerPrompter::plain()),
        Backend::Dialoguer => Box::new(DialoguerPrompter::new()),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let defaults = scaffold::project_defaults()?;
    let mut questionnaire = Questionnaire::new(prompter(cli));

    let summary = scaffold::run(&mut questionnaire, &defaults, &cli.settings_dir)?;

    println!();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<QuestionnaireError>()
        .is_some_and(QuestionnaireError::is_cancelled)
}

fn main() -> ExitCode {
    // Prompts own stdout, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_cancelled(&err) => {
            eprintln!("Cancelled.");
            ExitCode::from(130)
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use questionnaire::PromptError;

    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["create-project"]);
        assert!(matches!(cli.backend, Backend::Requestty));
        assert!(!cli.plain);
        assert_eq!(cli.settings_dir, "~");
    }

    #[test]
    fn cli_dialoguer_plain() {
        let cli = Cli::parse_from([
            "create-project",
            "--backend",
            "dialoguer",
            "--plain",
            "--settings-dir",
            "/tmp",
        ]);
        assert!(matches!(cli.backend, Backend::Dialoguer));
        assert!(cli.plain);
        assert_eq!(cli.settings_dir, "/tmp");
    }

    #[test]
    fn cancellation_is_detected_through_anyhow() {
        let err = anyhow::Error::from(QuestionnaireError::from(PromptError::Cancelled));
        assert!(is_cancelled(&err));

        let err = anyhow::anyhow!("disk full");
        assert!(!is_cancelled(&err));
    }
}
