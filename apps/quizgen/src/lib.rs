pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod watcher;

use anyhow::{bail, Context};
use quiz_core::{check_question, ContentState, FileSource, QuizContent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::pipeline::Pipeline;

/// Install the stderr tracing subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    match &cli.command {
        Some(Command::Check { path }) => {
            let path = path.clone().unwrap_or_else(|| cli.output_path());
            check(FileSource::new(path))
        }
        None => generate(&cli),
    }
}

fn generate(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.pipeline_config().context("Invalid configuration")?;
    let pipeline = Pipeline::new(config);

    pipeline.run().context("Pipeline failed")?;

    if cli.watch {
        watcher::watch(&pipeline).context("Watcher failed")?;
    }

    Ok(())
}

/// Load a bank the way a consumer would and report broken questions.
pub fn check(source: FileSource) -> anyhow::Result<()> {
    let path = source.path().display().to_string();
    let mut content = QuizContent::new(source);

    let questions = match content.ensure_loaded() {
        ContentState::Ready(questions) => questions,
        ContentState::Error(message) => bail!("{}", message),
        state => bail!("Unexpected content state for {}: {:?}", path, state),
    };

    let mut invalid = 0;
    for question in questions {
        let violations = check_question(question);
        if violations.is_empty() {
            continue;
        }
        invalid += 1;
        for violation in violations {
            tracing::warn!(id = %question.id, "{}", violation);
        }
    }

    if invalid > 0 {
        bail!("{} of {} questions in {} are invalid", invalid, questions.len(), path);
    }

    tracing::info!("{} questions in {} are valid", questions.len(), path);
    Ok(())
}
