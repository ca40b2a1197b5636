use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{ScamscanConfig, CONFIG_FILE_NAME};

const HEADER: &str = "# scamscan configuration\n\
# Every section is optional; omitted values fall back to the built-in defaults.\n\n";

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = ScamscanConfig::default()
        .to_toml_string()
        .context("Failed to render default configuration")?;

    std::fs::write(config_path, format!("{HEADER}{body}"))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
