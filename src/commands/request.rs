use anyhow::{Context, Result};
use std::io::Read;
use std::process::ExitCode;

use super::exit_code_for_status;
use crate::api::{handle_request, ApiReply};
use crate::scanner::Scanner;

/// Read one JSON request from stdin and print the reply body.
pub fn handle_stdin_request(scanner: &Scanner) -> Result<ExitCode> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("Failed to read request from stdin")?;

    let reply = handle_request(scanner, &body);
    print_reply(&reply)?;
    Ok(exit_code_for_status(reply.status))
}

fn print_reply(reply: &ApiReply) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(&reply.body).context("Failed to encode reply")?;
    println!("{rendered}");
    Ok(())
}
