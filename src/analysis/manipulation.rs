//! Manipulation-pattern detection, independent of claim-level analysis
//!
//! Four checks run against the lower-cased text in fixed order:
//! absolute-language overgeneralization, hero/villain moral framing,
//! emotional-pressure vocabulary, and absence of any sourcing cue.
//! Each firing check appends one finding; when none fire, a single
//! default finding is returned, so the result is never empty.

use regex::Regex;
use std::sync::OnceLock;

static ABSOLUTE_LANGUAGE: OnceLock<Regex> = OnceLock::new();
static MORAL_FRAMING: OnceLock<Regex> = OnceLock::new();
static EMOTIONAL_PRESSURE: OnceLock<Regex> = OnceLock::new();
static SOURCING_CUES: OnceLock<Regex> = OnceLock::new();

fn absolute_language() -> &'static Regex {
    ABSOLUTE_LANGUAGE.get_or_init(|| {
        Regex::new(r"\b(always|never|everyone|no one|all of them)\b").expect("valid regex")
    })
}

fn moral_framing() -> &'static Regex {
    MORAL_FRAMING.get_or_init(|| {
        Regex::new(r"\b(hero|villain|evil|savior|traitor)\b").expect("valid regex")
    })
}

fn emotional_pressure() -> &'static Regex {
    EMOTIONAL_PRESSURE.get_or_init(|| {
        Regex::new(r"\b(shocking|you won't believe|terrifying|outrage|panic)\b")
            .expect("valid regex")
    })
}

fn sourcing_cues() -> &'static Regex {
    SOURCING_CUES.get_or_init(|| {
        Regex::new(
            r"\b(according to|data|study|report|source|document|records|official statement)\b",
        )
        .expect("valid regex")
    })
}

/// Finding emitted when no rhetorical pattern fires.
pub const NO_PATTERN_FINDING: &str = "No dominant manipulation pattern detected from text alone; \
     external source checks still required.";

/// Detect rhetorical manipulation patterns. Always returns at least
/// one finding.
pub fn detect_manipulation(text: &str) -> Vec<String> {
    let t = text.to_lowercase();
    let mut findings = Vec::new();

    if absolute_language().is_match(&t) {
        findings.push(
            "One-sided framing: absolute language indicates potential overgeneralization."
                .to_string(),
        );
    }
    if moral_framing().is_match(&t) {
        findings
            .push("Hero/villain framing: binary moral narrative may suppress nuance.".to_string());
    }
    if emotional_pressure().is_match(&t) {
        findings.push(
            "Emotional pressure: highly charged phrasing may displace evidence-led evaluation."
                .to_string(),
        );
    }
    if !sourcing_cues().is_match(&t) {
        findings.push(
            "Unsupported assertions risk: limited traceable sourcing cues in the text.".to_string(),
        );
    }

    if findings.is_empty() {
        findings.push(NO_PATTERN_FINDING.to_string());
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_language_fires() {
        let findings = detect_manipulation("They always lie and no one checks the data.");
        assert!(findings.iter().any(|f| f.contains("One-sided framing")));
    }

    #[test]
    fn test_all_four_checks_can_fire_together() {
        let findings =
            detect_manipulation("Everyone calls him a villain and the shocking truth spreads.");
        assert_eq!(findings.len(), 4);
        assert!(findings[0].contains("One-sided framing"));
        assert!(findings[1].contains("Hero/villain framing"));
        assert!(findings[2].contains("Emotional pressure"));
        assert!(findings[3].contains("Unsupported assertions risk"));
    }

    #[test]
    fn test_sourced_text_suppresses_sourcing_finding() {
        let findings = detect_manipulation("According to the report, output rose.");
        assert!(!findings
            .iter()
            .any(|f| f.contains("Unsupported assertions risk")));
    }

    #[test]
    fn test_default_finding_when_nothing_fires() {
        // Sourcing vocabulary present, no rhetorical vocabulary at all
        let findings = detect_manipulation("The study and the report describe the data.");
        assert_eq!(findings, vec![NO_PATTERN_FINDING.to_string()]);
    }

    #[test]
    fn test_never_empty() {
        for input in ["", "plain words", "according to data"] {
            assert!(!detect_manipulation(input).is_empty(), "input: {input:?}");
        }
    }
}
