//! CLI command implementations.
//!
//! - **scan**: score one message and print the verdict
//! - **request**: answer a JSON request read from stdin
//! - **init**: write a default `.scamscan.toml`
//! - **categories**: list the active keyword tables

pub mod categories;
pub mod init;
pub mod request;
pub mod scan;

pub use categories::list_categories;
pub use init::init_config;
pub use request::handle_stdin_request;
pub use scan::{run_scan, ScanCommand};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, load_config_from_path, ScamscanConfig};
use crate::scanner::Scanner;

/// Explicit path is strict; otherwise the nearest `.scamscan.toml` or the
/// defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<ScamscanConfig> {
    match path {
        Some(path) => load_config_from_path(path).map_err(|e| {
            let code = e.code();
            anyhow::Error::new(e).context(format!(
                "Failed to load configuration from {} [{code}]",
                path.display()
            ))
        }),
        None => Ok(load_config()),
    }
}

pub fn build_scanner(config: &ScamscanConfig) -> Result<Scanner> {
    Scanner::new(config).context("Invalid scanner configuration")
}

pub fn load_scanner(path: Option<PathBuf>) -> Result<Scanner> {
    let config = resolve_config(path.as_deref())?;
    build_scanner(&config)
}

/// Process exit code for a reply status: 0 ok, 2 rejected input, 1 anything
/// else.
pub fn exit_code_for_status(status: u16) -> ExitCode {
    match status {
        200 => ExitCode::SUCCESS,
        400 => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
