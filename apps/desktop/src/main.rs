mod commands;
mod interactive;
mod summarize;
mod terminal_host;

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wizard_core::{load_settings, SummaryHeader};

use crate::{interactive::InteractiveSession, summarize::OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "sotl", about = "Reflect on a teaching problem and get a SoTL starting point")]
struct Args {
    /// Settings file; defaults to the per-user config directory.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Walk through the intro, form and summary screens at the prompt.
    Interactive,
    /// Build a summary from a JSON answers file.
    Summarize {
        answers: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings(args.settings.as_deref())?;
    let today = chrono::Local::now().date_naive();

    match args.command.unwrap_or(Mode::Interactive) {
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            InteractiveSession::new(settings, today).run(stdin.lock(), &mut stdout)
        }
        Mode::Summarize {
            answers,
            format,
            output,
        } => {
            let raw = fs::read_to_string(&answers)
                .with_context(|| format!("failed to read answers file '{}'", answers.display()))?;
            let header = SummaryHeader::new(settings.event_title, today);
            let rendered = summarize::summarize(&raw, format, &header)?;
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    info!(path = %path.display(), ?format, "summary written");
                    Ok(())
                }
                None => {
                    println!("{rendered}");
                    Ok(())
                }
            }
        }
    }
}
