//! Markdown reporter for sharing reports in issues and PRs

use crate::models::AnalysisResult;
use anyhow::Result;
use chrono::Utc;

/// Render the report as GitHub-flavored Markdown
pub fn render(result: &AnalysisResult) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Narrascope Intelligence Report\n\n");
    out.push_str(&format!(
        "_Generated {} - heuristic triangulation, not ground truth._\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    out.push_str(&format!("**Topic:** {}\n\n", result.topic));

    out.push_str("## Scores\n\n");
    out.push_str("| Metric | Score |\n|---|---|\n");
    out.push_str(&format!("| Objectivity | {}/100 |\n", result.objectivity_score));
    out.push_str(&format!(
        "| Factual reliability | {}/100 |\n",
        result.reliability_score
    ));
    out.push_str(&format!(
        "| PR / propaganda probability | {}/100 |\n\n",
        result.propaganda_probability
    ));

    out.push_str("## Extracted claims\n\n");
    if result.claims.is_empty() {
        out.push_str("_No claim candidates extracted._\n\n");
    }
    for (i, claim) in result.claims.iter().enumerate() {
        out.push_str(&format!("{}. **{}**\n", i + 1, claim.claim));
        out.push_str(&format!(
            "   - {} | {} | {} | verifiability: {}\n",
            claim.claim_type, claim.specificity, claim.evidence_status, claim.verifiability
        ));
        out.push_str(&format!("   - {}\n", claim.rationale));
    }
    out.push('\n');

    out.push_str("## Likely intent\n\n");
    out.push_str(&format!(
        "**{}** - {}\n\n",
        result.intent_label, result.intent_reason
    ));

    out.push_str("## Manipulation risk\n\n");
    for finding in &result.manipulation_findings {
        out.push_str(&format!("- {finding}\n"));
    }
    out.push('\n');

    out.push_str("## Final assessment\n\n");
    out.push_str(&format!("**{}**\n\n{}\n\n", result.final_assessment, result.reasoning));

    out.push_str("## Triangulation references\n\n");
    for reference in &result.references {
        let title = if reference.link.is_empty() {
            format!("**{}**", reference.title)
        } else {
            format!("**[{}]({})**", reference.title, reference.link)
        };
        out.push_str(&format!(
            "- {} - {} ({})\n",
            title, reference.source, reference.viewpoint
        ));
        if !reference.summary.is_empty() {
            out.push_str(&format!("  - {}\n", reference.summary));
        }
    }
    out.push('\n');

    out.push_str("## Further investigation\n\n");
    for question in &result.follow_up_questions {
        out.push_str(&format!("- {question}\n"));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::references::{LookupSettings, ReferenceFinder};

    #[test]
    fn test_markdown_sections_present() {
        let result = Analyzer::new(ReferenceFinder::new(LookupSettings {
            offline: true,
            ..Default::default()
        }))
        .analyze("The senate passed the policy before the election.");

        let rendered = render(&result).unwrap();
        assert!(rendered.starts_with("# Narrascope Intelligence Report"));
        for heading in [
            "## Scores",
            "## Extracted claims",
            "## Likely intent",
            "## Manipulation risk",
            "## Final assessment",
            "## Triangulation references",
            "## Further investigation",
        ] {
            assert!(rendered.contains(heading), "missing {heading}");
        }
    }
}
