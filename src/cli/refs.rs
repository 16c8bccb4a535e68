//! Refs command: standalone reference triangulation for a topic

use crate::config::Config;
use crate::models::ReferenceArticle;
use crate::references::ReferenceFinder;
use crate::reporters::OutputFormat;
use anyhow::{bail, Result};
use std::str::FromStr;

pub(crate) fn run(topic: &str, format: &str, offline: bool) -> Result<()> {
    if topic.trim().is_empty() {
        bail!("topic is empty - provide a topic to look up");
    }
    let format = OutputFormat::from_str(format)?;

    let config = Config::load();
    let finder = ReferenceFinder::new(config.lookup_settings(offline));

    let spinner = super::analyze::spinner("Triangulating references...");
    let references = finder.find_references(topic.trim());
    spinner.finish_and_clear();

    println!("{}", render(topic, &references, format)?);
    Ok(())
}

fn render(topic: &str, references: &[ReferenceArticle], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(references)?),
        OutputFormat::Markdown => {
            let mut out = format!("## References for {topic}\n\n");
            for reference in references {
                out.push_str(&format!(
                    "- **{}** - {} ({})\n",
                    reference.title, reference.source, reference.viewpoint
                ));
            }
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = format!("References for '{topic}':\n");
            for reference in references {
                out.push_str(&format!(
                    "  • {} - {} ({})\n",
                    reference.title, reference.source, reference.viewpoint
                ));
                if !reference.link.is_empty() {
                    out.push_str(&format!("    {}\n", reference.link));
                }
            }
            Ok(out)
        }
    }
}
