//! The narrative-assessment pipeline
//!
//! Orchestrates: normalization → topic + claim extraction → per-claim
//! assessment → intent inference → manipulation detection → score
//! aggregation → final classification → follow-up synthesis →
//! reference triangulation, assembled into one immutable
//! [`AnalysisResult`].
//!
//! The pipeline is total over any string input: every path ends in a
//! well-formed result. Callers are expected to reject empty input
//! before invoking it; the pipeline itself will still produce a
//! fallback-topic report rather than fail.

pub mod claims;
pub mod intent;
pub mod manipulation;
pub mod questions;
pub mod scoring;
pub mod text;

use crate::models::{AnalysisResult, REASONING};
use crate::references::ReferenceFinder;
use tracing::debug;

pub use scoring::ScoreWeights;

/// One-input-one-report pipeline. Holds no state across invocations
/// apart from the reference finder's bounded lookup cache.
pub struct Analyzer {
    finder: ReferenceFinder,
    weights: ScoreWeights,
}

impl Analyzer {
    pub fn new(finder: ReferenceFinder) -> Self {
        Self {
            finder,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(finder: ReferenceFinder, weights: ScoreWeights) -> Self {
        Self { finder, weights }
    }

    /// Run the full pipeline over one block of text.
    pub fn analyze(&self, input: &str) -> AnalysisResult {
        let normalized = text::normalize(input);

        let topic = text::extract_topic(&normalized);
        let candidates = text::extract_claim_candidates(&normalized);
        let assessed: Vec<_> = candidates.iter().map(|c| claims::assess_claim(c)).collect();
        debug!(
            topic = %topic,
            claims = assessed.len(),
            "claim extraction complete"
        );

        let intent = intent::infer_intent(&normalized);
        let manipulation = manipulation::detect_manipulation(&normalized);
        let scores = scoring::compute_scores(&assessed, &manipulation, intent, &self.weights);
        let final_assessment = scoring::determine_final_assessment(scores, intent, &self.weights);
        debug!(
            intent = %intent,
            objectivity = scores.objectivity,
            reliability = scores.reliability,
            propaganda = scores.propaganda,
            "scores computed"
        );

        let references = self.finder.find_references(&topic);
        let follow_up_questions =
            questions::build_follow_up_questions(&topic, &assessed, &manipulation);

        AnalysisResult {
            topic,
            claims: assessed,
            references,
            follow_up_questions,
            intent_label: intent,
            intent_reason: intent.reason().to_string(),
            manipulation_findings: manipulation,
            objectivity_score: scores.objectivity,
            reliability_score: scores.reliability,
            propaganda_probability: scores.propaganda,
            final_assessment,
            reasoning: REASONING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EvidenceStatus, FinalAssessment, Intent, Specificity, Verifiability};
    use crate::references::LookupSettings;

    fn offline_analyzer() -> Analyzer {
        Analyzer::new(ReferenceFinder::new(LookupSettings {
            offline: true,
            ..Default::default()
        }))
    }

    #[test]
    fn test_sourced_specific_claim_scenario() {
        let result = offline_analyzer()
            .analyze("According to a 2023 report, emissions fell by 23% in Germany.");

        assert!(
            result.topic.contains("emissions") || result.topic.contains("germany"),
            "topic was {:?}",
            result.topic
        );
        assert!(!result.claims.is_empty());
        let claim = &result.claims[0];
        assert_eq!(claim.specificity, Specificity::Specific);
        assert_eq!(claim.evidence_status, EvidenceStatus::Present);
        assert_eq!(claim.verifiability, Verifiability::High);
    }

    #[test]
    fn test_question_input_scenario() {
        let result = offline_analyzer().analyze("Do aliens exist?");
        assert!(result.topic.contains("aliens"), "topic: {:?}", result.topic);
        // The single sentence is a question, so the whole-input fallback applies
        assert_eq!(result.claims.len(), 1);
    }

    #[test]
    fn test_pr_input_scenario() {
        let result = offline_analyzer()
            .analyze("Our company delivered an award-winning platform trusted worldwide.");
        assert_eq!(result.intent_label, Intent::Pr);
        assert_eq!(result.final_assessment, FinalAssessment::PrManagement);
    }

    #[test]
    fn test_plain_text_gets_default_manipulation_finding() {
        let result =
            offline_analyzer().analyze("The study and the report describe the data in detail.");
        assert_eq!(result.manipulation_findings.len(), 1);
        assert!(result.manipulation_findings[0].contains("No dominant manipulation pattern"));
    }

    #[test]
    fn test_empty_input_still_yields_well_formed_result() {
        let result = offline_analyzer().analyze("   \n\t ");
        assert_eq!(result.topic, "general topic");
        assert!(result.claims.is_empty());
        assert!(!result.manipulation_findings.is_empty());
        assert!(result.objectivity_score <= 100);
        assert!(result.reliability_score <= 100);
        assert!(result.propaganda_probability <= 100);
        assert!(!result.follow_up_questions.is_empty());
    }

    #[test]
    fn test_result_carries_fixed_reasoning() {
        let result = offline_analyzer().analyze("The vote concluded yesterday evening.");
        assert_eq!(result.reasoning, REASONING);
        assert_eq!(result.intent_reason, result.intent_label.reason());
    }

    #[test]
    fn test_offline_references_present() {
        let result = offline_analyzer().analyze("The harbor expansion was approved in 2022.");
        assert!(!result.references.is_empty());
        assert!(result.references.len() <= 14);
    }
}
