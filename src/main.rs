//! DraftSense - Artifact intent detection for AI legal assistants
//!
//! Diagnostic CLI around the classifier: classify a message, inspect its
//! score breakdown, or print the active configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use draftsense::{ArtifactClassifier, DetectionConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "draftsense")]
#[command(version)]
#[command(about = "Artifact intent detection for AI legal assistants")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "DRAFTSENSE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a message
    Classify {
        /// Message content
        #[arg(short, long)]
        message: String,
    },

    /// Show the detailed score breakdown for a message
    Score {
        /// Message content
        #[arg(short, long)]
        message: String,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("draftsense={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        DetectionConfig::load(config_path)?
    } else {
        DetectionConfig::default()
    };

    match cli.command {
        Commands::Classify { message } => {
            let classifier = ArtifactClassifier::new(config)?;
            match classifier.classify(&message) {
                Some(artifact) => println!("{}", artifact),
                None => println!("none"),
            }
        }
        Commands::Score { message } => {
            let classifier = ArtifactClassifier::new(config)?;
            let details = classifier.score_details(&message);
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        Commands::Config { default } => {
            let shown = if default {
                DetectionConfig::default()
            } else {
                config
            };
            println!("{}", toml::to_string_pretty(&shown)?);
        }
    }

    Ok(())
}
