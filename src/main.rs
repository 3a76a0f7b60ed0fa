//! Understory CLI entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "understory")]
#[command(about = "Layered natural-language summaries for remote repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Cache directory (defaults to ~/.understory-cache)
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a repository and print the layered summary
    Analyze {
        /// Repository URL to clone and summarize
        url: String,

        /// Summarization backend: "hosted" or "extractive"
        #[arg(short, long, default_value = "hosted")]
        provider: String,

        /// API key for the hosted backend (falls back to UNDERSTORY_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Clear the result cache
    Clear,
    /// Show version
    Version,
}

fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".understory-cache")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "understory={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cache_dir = cli.cache_dir.unwrap_or_else(default_cache_dir);
    tracing::info!("Understory v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze {
            url,
            provider,
            api_key,
        } => commands::analyze(&url, &provider, api_key, cache_dir).await,
        Commands::Clear => commands::clear(cache_dir),
        Commands::Version => {
            println!("Understory v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
