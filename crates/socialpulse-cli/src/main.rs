mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "socialpulse-cli")]
#[command(about = "Score social posts and print dashboard summaries as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single text
    Score {
        /// Text to score
        text: String,
    },
    /// Summarize many texts, one per line
    Summarize {
        /// Read texts from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Score a sample batch and print the platform overview
    Overview {
        /// Override the configured sample size
        #[arg(long)]
        count: Option<usize>,

        /// Seed the sample producer for a repeatable batch
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a sample batch and print the 7-day sentiment timeline
    Timeline {
        /// Override the configured sample size
        #[arg(long)]
        count: Option<usize>,

        /// Seed the sample producer for a repeatable batch
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = socialpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Some(Commands::Score { text }) => commands::run_score(Some(text.as_str()))?,
        Some(Commands::Summarize { file }) => {
            let input = commands::read_input(file.as_deref())?;
            commands::run_summarize(&input)?
        }
        Some(Commands::Overview { count, seed }) => {
            let source = commands::sample_source(&config, count, seed);
            commands::run_overview(&source, chrono::Utc::now())?
        }
        Some(Commands::Timeline { count, seed }) => {
            let source = commands::sample_source(&config, count, seed);
            commands::run_timeline(&source, chrono::Utc::now())?
        }
        None => {
            println!("socialpulse-cli: run with --help to list commands");
            return Ok(());
        }
    };

    println!("{output}");
    Ok(())
}
