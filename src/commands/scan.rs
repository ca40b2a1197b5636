use anyhow::{Context, Result};
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use super::{build_scanner, exit_code_for_status, resolve_config};
use crate::aggregator::Recommendation;
use crate::api::{respond, ErrorResponse, ScanOptions, ScanResponse};
use crate::cli::{OutputFormat, ThresholdPreset};

#[derive(Debug, Clone)]
pub struct ScanCommand {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub threshold_preset: Option<ThresholdPreset>,
}

pub fn run_scan(command: ScanCommand) -> Result<ExitCode> {
    let mut config = resolve_config(command.config.as_deref())?;
    if let Some(preset) = command.threshold_preset {
        config = config.with_thresholds(preset.thresholds());
    }
    let scanner = build_scanner(&config)?;
    let text = read_input(command.text, command.file)?;
    let options = ScanOptions {
        debug: command.debug,
    }
    .with_env_overrides();

    match respond(&scanner, &text, options) {
        Ok(response) => {
            match command.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
                OutputFormat::Text => print!("{}", render_text(&response)),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            match command.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorResponse::from(&err))?
                ),
                OutputFormat::Text => {
                    eprintln!("{} {}", "error:".red().bold(), err.public_message())
                }
            }
            Ok(exit_code_for_status(err.status()))
        }
    }
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

fn tier_color(level: &str) -> Color {
    match level {
        "High" => Color::Red,
        "Medium" => Color::Yellow,
        _ => Color::Green,
    }
}

pub fn render_text(response: &ScanResponse) -> String {
    let mut out = format!(
        "{} {} (score {})\n",
        response.result.color(tier_color(&response.threat_level)).bold(),
        format!("[{} risk]", response.threat_level).dimmed(),
        response.score
    );
    out.push_str(&format!("{}\n", response.explanation));

    let details = &response.details;
    if !details.keywords_found.is_empty() {
        out.push_str(&format!(
            "  keywords: {}\n",
            details.keywords_found.join(", ")
        ));
    }
    for url in &details.suspicious_urls {
        out.push_str(&format!("  suspicious link: {url}\n"));
    }
    if details.contact_info.has_phones || details.contact_info.has_emails {
        out.push_str(&format!(
            "  contact details: phone {}, email {}\n",
            yes_no(details.contact_info.has_phones),
            yes_no(details.contact_info.has_emails)
        ));
    }

    if let Some(debug) = &response.debug {
        out.push_str(&format!("{}\n", "breakdown:".bold()));
        for (analyzer, points) in debug.findings.contributions() {
            out.push_str(&format!("  {analyzer:<10} {points}\n"));
        }
        for finding in &debug.findings.urls.findings {
            for reason in &finding.reasons {
                out.push_str(&format!("  {} {}: {reason}\n", "url".dimmed(), finding.url));
            }
        }
        for reason in debug
            .findings
            .contacts
            .reasons
            .iter()
            .chain(&debug.findings.quality.reasons)
        {
            out.push_str(&format!("  {reason}\n"));
        }
        out.push_str(&format!(
            "  quality score {}/100\n",
            debug.findings.quality.quality_score
        ));
    }
    out.push_str(&format!(
        "{}\n",
        recommendation_advice(&response.result).italic()
    ));
    out
}

fn recommendation_advice(verdict: &str) -> &'static str {
    Recommendation::ALL
        .into_iter()
        .find(|r| r.verdict() == verdict)
        .map(|r| r.advice())
        .unwrap_or("")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
