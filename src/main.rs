//! Workspace CLI entrypoint.

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};
use codebench::{Edit, Outcome, Playground, RunStatus};
use codebench_core::store::DocumentStore;
use codebench_core::{languages, Config};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "codebench", about = "Interactive coding workspace", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the language catalog
    Languages,
    /// Run a source file through the execution pipeline
    Run {
        /// Path to the source file
        file: String,
        /// Language id (inferred from the file extension when omitted)
        #[arg(short, long)]
        language: Option<String>,
        /// Save a document snapshot after the run
        #[arg(long)]
        save: bool,
    },
    /// List saved document snapshots, most recent first
    List {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codebench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Languages => {
            for language in languages::list_supported() {
                println!(
                    "{:<12} {:<12} .{:<5} {}",
                    language.id,
                    language.display_name,
                    language.extension,
                    if language.execution_supported {
                        "runnable"
                    } else {
                        "editor only"
                    }
                );
            }
            Ok(())
        }
        Commands::Run {
            file,
            language,
            save,
        } => run_file(&config, &file, language.as_deref(), save),
        Commands::List { limit } => {
            let store = DocumentStore::open(&config.db_path)?;
            for row in store.list()?.into_iter().take(limit) {
                println!(
                    "{:<36} {:<20} {:<12} {}",
                    row.id,
                    row.name,
                    row.language,
                    row.saved_at.format("%Y-%m-%d %H:%M:%S")
                );
            }
            Ok(())
        }
    }
}

fn run_file(config: &Config, path: &str, language: Option<&str>, save: bool) -> anyhow::Result<()> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;

    let descriptor = match language {
        Some(id) => languages::describe(id)?,
        None => {
            let extension = Path::new(path)
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("");
            languages::descriptor_for_extension(extension).with_context(|| {
                format!("no language registered for extension '{}'", extension)
            })?
        }
    };

    let mut playground = Playground::new(config);
    playground.change_language(descriptor.id)?;

    // Feed the file through the same path an editor keystroke takes.
    let length = playground.session().surface().len_chars();
    playground.apply_edit(&Edit::Replace {
        range: 0..length,
        text: source,
    })?;

    let status = playground.run();
    for line in playground.console().lines() {
        println!("{}", line);
    }

    if save {
        let store = DocumentStore::open(&config.db_path)?;
        playground.save_active(&store)?;
    }
    for notice in playground.drain_notices() {
        eprintln!("{}: {}", notice.title, notice.description);
    }

    match status {
        RunStatus::Completed(result) if result.outcome == Outcome::Success => Ok(()),
        RunStatus::Completed(_) => std::process::exit(1),
        RunStatus::Rejected => bail!("execution engine is busy"),
    }
}
