use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::TierThresholds;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThresholdPreset {
    /// Lower breakpoints; flags more messages
    Strict,
    /// Default breakpoints (8 / 4 / 1)
    Balanced,
    /// Higher breakpoints for noisy inboxes
    Lenient,
}

impl ThresholdPreset {
    pub fn thresholds(self) -> TierThresholds {
        match self {
            ThresholdPreset::Strict => TierThresholds::strict(),
            ThresholdPreset::Balanced => TierThresholds::default(),
            ThresholdPreset::Lenient => TierThresholds::lenient(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// The JSON response body
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "scamscan")]
#[command(about = "Score text for scam and phishing risk", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a message and report its risk tier
    Scan {
        /// Text to scan (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Include the per-analyzer breakdown
        #[arg(long, env = "SCAMSCAN_DEBUG", value_parser = clap::builder::BoolishValueParser::new())]
        debug: bool,

        /// Configuration file (defaults to the nearest .scamscan.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Tier threshold preset, overriding the configuration file
        #[arg(long = "threshold-preset", value_enum)]
        threshold_preset: Option<ThresholdPreset>,
    },

    /// Answer a JSON scan request read from stdin
    Request {
        /// Configuration file (defaults to the nearest .scamscan.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a scamscan configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List the active keyword categories and their weights
    Categories {
        /// Configuration file (defaults to the nearest .scamscan.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
