//! Analyze command: input collection, pipeline run, report rendering

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::references::ReferenceFinder;
use crate::reporters::{self, OutputFormat};
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub(crate) fn run(
    text: Option<String>,
    file: Option<PathBuf>,
    format: &str,
    offline: bool,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let input = collect_input(text, file)?;
    if input.trim().is_empty() {
        bail!("input text is empty - provide a claim, news excerpt, or question to analyze");
    }

    let config = Config::load();
    let finder = ReferenceFinder::new(config.lookup_settings(offline));
    let analyzer = Analyzer::with_weights(finder, config.score_weights());

    let spinner = spinner("Analyzing narrative and triangulating references...");
    let result = analyzer.analyze(&input);
    spinner.finish_and_clear();

    let rendered = reporters::report_with_format(&result, format)?;
    println!("{rendered}");
    Ok(())
}

/// Resolve the input text: explicit argument, then file, then stdin.
fn collect_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("could not read input file {}", path.display()));
    }
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("could not read input from stdin")?;
    Ok(buffer)
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
