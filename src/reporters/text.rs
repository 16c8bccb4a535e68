//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisResult, FinalAssessment, Verifiability};
use anyhow::Result;
use chrono::Utc;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Color a 0-100 score: green is good, red is bad. `inverse` flips the
/// scale for scores where high is bad (propaganda probability).
fn score_color(score: u8, inverse: bool) -> &'static str {
    let effective = if inverse { 100 - score } else { score };
    match effective {
        70..=100 => "\x1b[32m", // Green
        40..=69 => "\x1b[33m",  // Yellow
        _ => "\x1b[31m",        // Red
    }
}

fn verifiability_color(verifiability: Verifiability) -> &'static str {
    match verifiability {
        Verifiability::High => "\x1b[32m",   // Green
        Verifiability::Medium => "\x1b[33m", // Yellow
        Verifiability::Low => "\x1b[31m",    // Red
    }
}

fn assessment_color(assessment: FinalAssessment) -> &'static str {
    match assessment {
        FinalAssessment::FactualReporting => "\x1b[32m", // Green
        FinalAssessment::PrManagement => "\x1b[33m",     // Yellow
        FinalAssessment::Propaganda => "\x1b[31m",       // Red
        FinalAssessment::Misleading => "\x1b[91m",       // Light red
    }
}

fn score_line(label: &str, score: u8, inverse: bool) -> String {
    let color = score_color(score, inverse);
    format!("  {label:<32} {color}{BOLD}{score:>3}/100{RESET}\n")
}

/// Render the report as formatted terminal output
pub fn render(result: &AnalysisResult) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Narrascope Intelligence Report{RESET}\n"));
    out.push_str(&format!(
        "{DIM}Generated {} - heuristic triangulation, not ground truth{RESET}\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────────────{RESET}\n\n"
    ));

    // Summary
    out.push_str(&format!("{BOLD}TOPIC{RESET}\n  {}\n\n", result.topic));
    out.push_str(&format!("{BOLD}SCORES{RESET}\n"));
    out.push_str(&score_line("Objectivity", result.objectivity_score, false));
    out.push_str(&score_line(
        "Factual reliability",
        result.reliability_score,
        false,
    ));
    out.push_str(&score_line(
        "PR / propaganda probability",
        result.propaganda_probability,
        true,
    ));
    out.push('\n');

    // Claims
    out.push_str(&format!(
        "{BOLD}EXTRACTED CLAIMS{RESET} ({} total)\n",
        result.claims.len()
    ));
    for (i, claim) in result.claims.iter().enumerate() {
        let v_color = verifiability_color(claim.verifiability);
        out.push_str(&format!("  {}. {}\n", i + 1, claim.claim));
        out.push_str(&format!(
            "     {DIM}{} | {} | {}{RESET} | verifiability: {v_color}{}{RESET}\n",
            claim.claim_type, claim.specificity, claim.evidence_status, claim.verifiability
        ));
        out.push_str(&format!("     {DIM}{}{RESET}\n", claim.rationale));
    }
    if result.claims.is_empty() {
        out.push_str(&format!("  {DIM}(no claim candidates extracted){RESET}\n"));
    }
    out.push('\n');

    // Intent and manipulation
    out.push_str(&format!(
        "{BOLD}LIKELY INTENT{RESET}\n  {}\n  {DIM}{}{RESET}\n\n",
        result.intent_label, result.intent_reason
    ));
    out.push_str(&format!("{BOLD}MANIPULATION RISK{RESET}\n"));
    for finding in &result.manipulation_findings {
        out.push_str(&format!("  - {finding}\n"));
    }
    out.push('\n');

    // Final assessment
    let a_color = assessment_color(result.final_assessment);
    out.push_str(&format!(
        "{BOLD}FINAL ASSESSMENT{RESET}\n  {a_color}{BOLD}{}{RESET}\n  {DIM}{}{RESET}\n\n",
        result.final_assessment, result.reasoning
    ));

    // References
    out.push_str(&format!(
        "{BOLD}TRIANGULATION REFERENCES{RESET} ({} total)\n",
        result.references.len()
    ));
    for reference in &result.references {
        out.push_str(&format!("  • {}\n", reference.title));
        out.push_str(&format!(
            "    {DIM}{} | {}{RESET}\n",
            reference.source, reference.viewpoint
        ));
        if !reference.summary.is_empty() {
            out.push_str(&format!("    {DIM}{}{RESET}\n", reference.summary));
        }
        if !reference.link.is_empty() {
            out.push_str(&format!("    {DIM}{}{RESET}\n", reference.link));
        }
    }
    out.push('\n');

    // Follow-up questions
    out.push_str(&format!("{BOLD}FURTHER INVESTIGATION{RESET}\n"));
    for question in &result.follow_up_questions {
        out.push_str(&format!("  - {question}\n"));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::references::{LookupSettings, ReferenceFinder};

    fn sample_result() -> AnalysisResult {
        Analyzer::new(ReferenceFinder::new(LookupSettings {
            offline: true,
            ..Default::default()
        }))
        .analyze("According to a 2023 report, emissions fell by 23% in Germany.")
    }

    #[test]
    fn test_render_contains_all_sections() {
        let rendered = render(&sample_result()).unwrap();
        for section in [
            "TOPIC",
            "SCORES",
            "EXTRACTED CLAIMS",
            "LIKELY INTENT",
            "MANIPULATION RISK",
            "FINAL ASSESSMENT",
            "TRIANGULATION REFERENCES",
            "FURTHER INVESTIGATION",
        ] {
            assert!(rendered.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn test_render_shows_scores_and_labels() {
        let result = sample_result();
        let rendered = render(&result).unwrap();
        assert!(rendered.contains(&result.final_assessment.to_string()));
        assert!(rendered.contains(&result.intent_label.to_string()));
    }

    #[test]
    fn test_score_color_inverse_flips_scale() {
        assert_eq!(score_color(90, false), "\x1b[32m");
        assert_eq!(score_color(90, true), "\x1b[31m");
        assert_eq!(score_color(50, false), "\x1b[33m");
    }
}
