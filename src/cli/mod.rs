//! CLI command definitions and handlers

mod analyze;
mod refs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Narrascope - narrative intelligence reports from free-form text
///
/// Deterministic heuristics only - no model calls, no accounts. The
/// two reference lookups (Wikipedia, Crossref) are the only network
/// traffic, and --offline disables them.
#[derive(Parser, Debug)]
#[command(name = "narrascope")]
#[command(
    version,
    about = "Turn a news excerpt, claim, or question into a structured intelligence report",
    long_about = "Narrascope extracts factual claims from a block of text, scores their \
verifiability, infers authorial intent, flags manipulation patterns, and triangulates \
reference sources across mainstream, academic, and alternative viewpoints.\n\n\
All classification is deterministic pattern/threshold logic: the report estimates how \
checkable a narrative is, not whether it is true.",
    after_help = "\
Examples:
  narrascope \"According to a 2023 report, emissions fell by 23% in Germany.\"
  narrascope analyze --file article.txt --format json
  cat article.txt | narrascope analyze
  narrascope refs \"emissions germany\" --offline

Documentation: https://github.com/narrascope/narrascope"
)]
pub struct Cli {
    /// Text to analyze (shorthand for `narrascope analyze <TEXT>`)
    pub text: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a block of text and render the intelligence report
    Analyze {
        /// Text to analyze; falls back to --file, then stdin
        text: Option<String>,

        /// Read the input text from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format (text, json, markdown)
        #[arg(long, default_value = "text")]
        format: String,

        /// Skip live reference lookups (deterministic output)
        #[arg(long, env = "NARRASCOPE_OFFLINE")]
        offline: bool,
    },

    /// Triangulate reference sources for a topic without a full analysis
    Refs {
        /// Topic to look up
        topic: String,

        /// Output format (text, json, markdown)
        #[arg(long, default_value = "text")]
        format: String,

        /// Skip live reference lookups (deterministic output)
        #[arg(long, env = "NARRASCOPE_OFFLINE")]
        offline: bool,
    },
}

/// Dispatch the parsed CLI to a command handler
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Analyze {
            text,
            file,
            format,
            offline,
        }) => analyze::run(text, file, &format, offline),
        Some(Commands::Refs {
            topic,
            format,
            offline,
        }) => refs::run(&topic, &format, offline),
        // Bare `narrascope "some text"` behaves like `analyze`
        None => analyze::run(cli.text, None, "text", false),
    }
}
