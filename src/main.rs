use anyhow::Result;
use clap::Parser;
use scamscan::cli::{Cli, Commands};
use scamscan::commands::{self, ScanCommand};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            text,
            file,
            format,
            debug,
            config,
            threshold_preset,
        } => commands::run_scan(ScanCommand {
            text,
            file,
            format,
            debug,
            config,
            threshold_preset,
        }),
        Commands::Request { config } => {
            let scanner = commands::load_scanner(config)?;
            commands::handle_stdin_request(&scanner)
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Categories { config } => {
            let config = commands::resolve_config(config.as_deref())?;
            commands::list_categories(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
