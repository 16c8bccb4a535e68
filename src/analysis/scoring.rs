//! Score aggregation and final classification
//!
//! Three integer scores in [0,100] are derived from the claim
//! assessments, the manipulation findings, and the inferred intent;
//! the final label is an ordered rule cascade over those scores. The
//! constants live in [`ScoreWeights`] so they stay tunable - the
//! scenario tests pin the behavior, not one set of magic numbers.

use crate::models::{ClaimAssessment, FinalAssessment, Intent, Verifiability};

/// Tunable weighting and threshold constants.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// Per-claim reliability weight for High verifiability.
    pub high_weight: f64,
    /// Per-claim reliability weight for Medium verifiability.
    pub medium_weight: f64,
    /// Per-claim reliability weight for Low verifiability.
    pub low_weight: f64,
    /// Objectivity penalty per manipulation finding beyond the first.
    pub manipulation_penalty: u32,
    /// Objectivity penalty for persuasion/emotional intent.
    pub directional_intent_penalty: u32,
    /// Objectivity penalty for political/PR intent.
    pub institutional_intent_penalty: u32,
    /// Objectivity never drops below this (never exactly zero).
    pub objectivity_floor: u8,
    /// Propaganda probability scale applied to (100 - objectivity).
    pub propaganda_scale: f64,
    /// Additive propaganda bump for political/PR intent.
    pub institutional_propaganda_bump: f64,
    /// Additive propaganda bump for all other intents.
    pub base_propaganda_bump: f64,
    /// Propaganda probability cap - residual uncertainty is preserved.
    pub propaganda_cap: u8,
    /// Political intent plus propaganda at or above this reads as propaganda.
    pub political_propaganda_threshold: u8,
    /// Factual-reporting rule: minimum reliability.
    pub factual_reliability_min: u8,
    /// Factual-reporting rule: minimum objectivity.
    pub factual_objectivity_min: u8,
    /// Factual-reporting rule: propaganda must stay below this.
    pub factual_propaganda_max: u8,
    /// Propaganda at or above this reads as PR even without PR intent.
    pub pr_propaganda_threshold: u8,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            high_weight: 1.0,
            medium_weight: 0.6,
            low_weight: 0.2,
            manipulation_penalty: 12,
            directional_intent_penalty: 22,
            institutional_intent_penalty: 12,
            objectivity_floor: 5,
            propaganda_scale: 0.74,
            institutional_propaganda_bump: 18.0,
            base_propaganda_bump: 8.0,
            propaganda_cap: 95,
            political_propaganda_threshold: 40,
            factual_reliability_min: 72,
            factual_objectivity_min: 68,
            factual_propaganda_max: 45,
            pr_propaganda_threshold: 70,
        }
    }
}

/// The three aggregate scores, each an integer in [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub objectivity: u8,
    pub reliability: u8,
    pub propaganda: u8,
}

/// Combine claim assessments, manipulation findings, and intent into
/// the three scores. Deterministic: no randomness, no state across
/// calls.
pub fn compute_scores(
    claims: &[ClaimAssessment],
    manipulation_findings: &[String],
    intent: Intent,
    weights: &ScoreWeights,
) -> Scores {
    let total = claims.len().max(1) as f64;
    let mut weighted = 0.0;
    for claim in claims {
        weighted += match claim.verifiability {
            Verifiability::High => weights.high_weight,
            Verifiability::Medium => weights.medium_weight,
            Verifiability::Low => weights.low_weight,
        };
    }
    let reliability = ((weighted / total) * 100.0) as i64;

    let manipulation_penalty =
        manipulation_findings.len().saturating_sub(1) as i64 * weights.manipulation_penalty as i64;
    let intent_penalty = if intent.is_directional() {
        weights.directional_intent_penalty as i64
    } else if intent.is_institutional() {
        weights.institutional_intent_penalty as i64
    } else {
        0
    };
    let objectivity =
        (100 - manipulation_penalty - intent_penalty).clamp(weights.objectivity_floor as i64, 100);

    let bump = if intent.is_institutional() {
        weights.institutional_propaganda_bump
    } else {
        weights.base_propaganda_bump
    };
    let propaganda = (((100 - objectivity) as f64 * weights.propaganda_scale + bump) as i64)
        .min(weights.propaganda_cap as i64);

    Scores {
        objectivity: objectivity.clamp(0, 100) as u8,
        reliability: reliability.clamp(0, 100) as u8,
        propaganda: propaganda.clamp(0, 100) as u8,
    }
}

/// Map scores plus intent to one terminal label. Ordered cascade,
/// first match wins; directional-intent rules come before the factual
/// rule so locally high scores cannot mask a strong agenda signal.
/// Falls through to the misleading/unreliable catch-all - never an
/// error.
pub fn determine_final_assessment(
    scores: Scores,
    intent: Intent,
    weights: &ScoreWeights,
) -> FinalAssessment {
    if intent == Intent::Political && scores.propaganda >= weights.political_propaganda_threshold {
        return FinalAssessment::Propaganda;
    }
    if intent == Intent::Pr {
        return FinalAssessment::PrManagement;
    }
    if scores.reliability >= weights.factual_reliability_min
        && scores.objectivity >= weights.factual_objectivity_min
        && scores.propaganda < weights.factual_propaganda_max
    {
        return FinalAssessment::FactualReporting;
    }
    if scores.propaganda >= weights.pr_propaganda_threshold {
        return FinalAssessment::PrManagement;
    }
    FinalAssessment::Misleading
}
