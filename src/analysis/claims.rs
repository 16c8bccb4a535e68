//! Per-claim assessment: specificity, evidence cues, verifiability, type
//!
//! `assess_claim` is a pure function of the claim string. The
//! verifiability ladder is: Specific + evidence cues = High, Specific
//! alone = Medium, Vague = Low - so a claim matching both the specific
//! and evidence patterns can never come out Low.

use crate::models::{ClaimAssessment, ClaimType, EvidenceStatus, Specificity, Verifiability};
use regex::Regex;
use std::sync::OnceLock;

static SPECIFIC_PATTERN: OnceLock<Regex> = OnceLock::new();
static VAGUE_PATTERN: OnceLock<Regex> = OnceLock::new();
static EVIDENCE_PATTERN: OnceLock<Regex> = OnceLock::new();
static PREDICTIVE_PATTERN: OnceLock<Regex> = OnceLock::new();
static NORMATIVE_PATTERN: OnceLock<Regex> = OnceLock::new();
static EVIDENCE_TYPE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Concrete anchors: bounded numeric token (optional decimal, optional
/// `%`), 4-digit year, month name, "according to", or a capitalized
/// `in <Place>` / `at <Place>` phrase. The place alternatives stay
/// case-sensitive; everything else is matched case-insensitively.
fn specific_pattern() -> &'static Regex {
    SPECIFIC_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i:\b\d{1,4}(?:\.\d+)?%?\b|\b\d{4}\b|\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\b|\baccording to\b)|\b(?:in|at) [A-Z][a-z]+",
        )
        .expect("valid regex")
    })
}

fn vague_pattern() -> &'static Regex {
    VAGUE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(many|some|experts say|people say|obviously|clearly|everyone knows)\b")
            .expect("valid regex")
    })
}

fn evidence_pattern() -> &'static Regex {
    EVIDENCE_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)\b(according to|data|study|report|source|document|records|official statement)\b",
        )
        .expect("valid regex")
    })
}

fn predictive_pattern() -> &'static Regex {
    PREDICTIVE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(will|expected|forecast|predict|likely to)\b").expect("valid regex")
    })
}

fn normative_pattern() -> &'static Regex {
    NORMATIVE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(should|must|need to|ought to)\b").expect("valid regex")
    })
}

fn evidence_type_pattern() -> &'static Regex {
    EVIDENCE_TYPE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(according to|study|data|report|official|document|records)\b")
            .expect("valid regex")
    })
}

/// Classify the claim into exactly one category. First matching
/// category wins; the ordering makes the categories mutually exclusive.
pub fn classify_claim_type(claim: &str) -> ClaimType {
    if predictive_pattern().is_match(claim) {
        ClaimType::Predictive
    } else if normative_pattern().is_match(claim) {
        ClaimType::Normative
    } else if evidence_type_pattern().is_match(claim) {
        ClaimType::EvidenceBacked
    } else {
        ClaimType::Factual
    }
}

/// Assess one extracted claim. Pure: same claim string, same result.
pub fn assess_claim(claim: &str) -> ClaimAssessment {
    let has_specific = specific_pattern().is_match(claim);
    let has_vague = vague_pattern().is_match(claim);
    let has_evidence = evidence_pattern().is_match(claim);

    let specificity = if has_specific && !has_vague {
        Specificity::Specific
    } else {
        Specificity::Vague
    };
    let evidence_status = if has_evidence {
        EvidenceStatus::Present
    } else {
        EvidenceStatus::Absent
    };
    let verifiability = match (specificity, evidence_status) {
        (Specificity::Specific, EvidenceStatus::Present) => Verifiability::High,
        (Specificity::Specific, EvidenceStatus::Absent) => Verifiability::Medium,
        (Specificity::Vague, _) => Verifiability::Low,
    };

    ClaimAssessment {
        claim: claim.to_string(),
        claim_type: classify_claim_type(claim),
        specificity,
        evidence_status,
        verifiability,
        rationale: build_rationale(specificity, evidence_status, verifiability),
    }
}

/// Regenerate the rationale from the structured fields - never stored
/// independently, so it cannot drift from them.
fn build_rationale(
    specificity: Specificity,
    evidence_status: EvidenceStatus,
    verifiability: Verifiability,
) -> String {
    let anchor_reason = match specificity {
        Specificity::Specific => "contains concrete anchors (time/place/quantity/source)",
        Specificity::Vague => "uses broad framing or lacks concrete anchors",
    };
    format!(
        "Claim evaluated as {} because it {}. {}. This yields {} independent verifiability potential.",
        specificity.to_string().to_lowercase(),
        anchor_reason,
        evidence_status,
        verifiability.to_string().to_lowercase(),
    )
}
