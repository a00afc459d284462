use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use clap::Parser;

use crate::extractor::extract_messages;
use crate::parsers::load_payload;
use crate::renderer::to_markdown;

/// Display timezone used when none is given on the command line.
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

#[derive(Parser)]
#[command(name = "chatgpt-transcript")]
#[command(version = "0.1.0")]
#[command(about = "Convert a ChatGPT conversation payload to Markdown", long_about = None)]
pub struct Cli {
    /// Path to the JSON payload file
    pub payload: PathBuf,

    /// Output Markdown file
    #[arg(default_value = "conversation.md")]
    pub output: PathBuf,

    /// Include only messages from the user
    #[arg(long, conflicts_with = "assistant_only")]
    pub user_only: bool,

    /// Include only messages from the assistant
    #[arg(long)]
    pub assistant_only: bool,

    /// IANA timezone for formatting message timestamps
    #[arg(long, value_name = "ZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,
}

impl Cli {
    /// Author roles to keep, derived from the filter flags.
    fn keep_roles(&self) -> BTreeSet<String> {
        if self.user_only {
            ["user".to_string()].into()
        } else if self.assistant_only {
            ["assistant".to_string()].into()
        } else {
            ["user".to_string(), "assistant".to_string()].into()
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert(&cli)
}

fn convert(cli: &Cli) -> Result<()> {
    let tz = cli
        .timezone
        .parse::<Tz>()
        .map_err(|_| anyhow!("unknown timezone '{}'", cli.timezone))?;
    let keep_roles = cli.keep_roles();

    let document = load_payload(&cli.payload)?;
    let mapping = document
        .mapping
        .ok_or_else(|| anyhow!("No 'mapping' key found in the provided payload."))?;

    let messages = extract_messages(&mapping, &keep_roles, tz)?;
    let markdown = to_markdown(&messages);

    fs::write(&cli.output, &markdown)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    // The file exists now, so canonicalize resolves to an absolute path.
    let resolved = fs::canonicalize(&cli.output).unwrap_or_else(|_| cli.output.clone());
    let roles: Vec<&str> = keep_roles.iter().map(String::as_str).collect();
    println!(
        "Wrote {} message(s) ({}) → {}",
        messages.len(),
        roles.join("/"),
        resolved.display()
    );

    Ok(())
}
