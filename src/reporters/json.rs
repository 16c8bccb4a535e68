//! JSON reporter for machine-readable output

use crate::models::AnalysisResult;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Envelope around the report with generation metadata.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

/// Render the report as pretty-printed JSON
pub fn render(result: &AnalysisResult) -> Result<String> {
    let report = JsonReport {
        generated_at: Utc::now(),
        tool: "narrascope",
        version: env!("CARGO_PKG_VERSION"),
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::references::{LookupSettings, ReferenceFinder};

    #[test]
    fn test_json_output_parses_and_keeps_report_fields() {
        let result = Analyzer::new(ReferenceFinder::new(LookupSettings {
            offline: true,
            ..Default::default()
        }))
        .analyze("Officials confirmed the launch in 2024 according to records.");

        let rendered = render(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["tool"], "narrascope");
        assert!(value["generated_at"].is_string());
        assert!(value["topic"].is_string());
        assert!(value["claims"].is_array());
        assert!(value["references"].is_array());
        assert!(value["objectivity_score"].is_u64());
        assert!(value["final_assessment"].is_string());
    }
}
