use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidnlq::{
    answer, build_scalar_query_at, emit_sql, interpret, user_hint, Dataset, FileConfig,
    MemoryStore, Settings,
};

#[derive(Parser, Debug)]
#[command(version, about = "Answer single-number questions about a video catalog")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the validated intent for a question or intent document.
    Parse {
        /// Question text (Russian or English) or a JSON intent document.
        input: String,
    },
    /// Print the SQL statement and its parameters for a question.
    Sql {
        input: String,
        /// Resolve time ranges against this instant (RFC 3339) instead of now.
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Answer a question against a JSON export of videos and snapshots.
    Run {
        input: String,
        /// Path to the export file: {"videos": [{..., "snapshots": [...]}]}.
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Resolve deployment settings and print them with secrets masked.
    Config {
        /// Optional YAML file; environment variables override its values.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let cli_args = CliArgs::parse();

    match cli_args.command {
        Command::Parse { input } => {
            let intent = interpret(&input).map_err(report)?;
            println!("{}", serde_json::to_string_pretty(&intent)?);
        }
        Command::Sql { input, now } => {
            let intent = interpret(&input).map_err(report)?;
            let query = build_scalar_query_at(&intent, now).map_err(|e| report(e.into()))?;
            let statement = emit_sql(&query).map_err(|e| report(e.into()))?;
            println!("{}", statement.sql);
            for (i, param) in statement.params.iter().enumerate() {
                println!("-- ${} = {}", i + 1, param);
            }
        }
        Command::Run { input, data, now } => {
            let json = std::fs::read_to_string(&data)
                .with_context(|| format!("Failed to read data file: {:?}", data))?;
            let dataset = Dataset::from_json(&json)
                .with_context(|| format!("Failed to parse data file: {:?}", data))?;
            info!(
                videos = dataset.videos.len(),
                snapshots = dataset.snapshots.len(),
                "loaded dataset"
            );
            let store = MemoryStore::from(dataset);
            let value = answer(&input, &store, now).map_err(report)?;
            println!("{value}");
        }
        Command::Config { file } => {
            let file_config = file.as_deref().map(FileConfig::load).transpose()?;
            let settings = Settings::from_env(file_config)?;
            println!("database_url: {}", settings.masked_database_url());
            println!(
                "bot_token: {}",
                if settings.bot_token.is_some() { "set" } else { "not set" }
            );
        }
    }

    Ok(())
}

/// Show the user-facing hint, keep the error for the exit status.
fn report(err: vidnlq::Error) -> anyhow::Error {
    eprintln!("{}", user_hint(&err));
    err.into()
}
