//! Core data models for Narrascope
//!
//! These models are used throughout the codebase for representing
//! extracted claims, reference articles, and the assembled report.
//! Labels that appear in rendered reports are closed enums with a
//! `Display` impl producing the report vocabulary; the serde renames
//! keep JSON output identical to the terminal wording.

use serde::{Deserialize, Serialize};

/// Fixed explanation attached to every report.
pub const REASONING: &str =
    "Assessment is derived from claim-level verifiability, sourcing cues, narrative framing, \
     and cross-source triangulation references; it is not keyword counting or simple one-shot \
     classification.";

/// Whether a claim carries concrete anchors (time/place/quantity/source).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specificity {
    Specific,
    Vague,
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Specificity::Specific => write!(f, "Specific"),
            Specificity::Vague => write!(f, "Vague"),
        }
    }
}

/// Whether explicit sourcing vocabulary was found in the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceStatus {
    #[serde(rename = "Evidence cues present")]
    Present,
    #[serde(rename = "No explicit evidence cues")]
    Absent,
}

impl std::fmt::Display for EvidenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceStatus::Present => write!(f, "Evidence cues present"),
            EvidenceStatus::Absent => write!(f, "No explicit evidence cues"),
        }
    }
}

/// Estimated ease of independently checking a claim - not its truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verifiability {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Verifiability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verifiability::High => write!(f, "High"),
            Verifiability::Medium => write!(f, "Medium"),
            Verifiability::Low => write!(f, "Low"),
        }
    }
}

/// Category of an extracted claim, checked in priority order
/// (predictive > normative > evidence-backed > plain assertion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimType {
    Predictive,
    Normative,
    #[serde(rename = "Evidence-backed factual")]
    EvidenceBacked,
    #[serde(rename = "Factual assertion")]
    Factual,
}

impl std::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimType::Predictive => write!(f, "Predictive"),
            ClaimType::Normative => write!(f, "Normative"),
            ClaimType::EvidenceBacked => write!(f, "Evidence-backed factual"),
            ClaimType::Factual => write!(f, "Factual assertion"),
        }
    }
}

/// Inferred communicative purpose of the whole input text.
///
/// Shared by the intent classifier, score aggregator, and final
/// classifier so intent-sensitive rules compare enum variants rather
/// than label strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "Reputation improvement (PR)")]
    Pr,
    #[serde(rename = "Political influence")]
    Political,
    Persuasion,
    #[serde(rename = "Emotional manipulation")]
    Emotional,
    #[serde(rename = "Neutral information")]
    Neutral,
}

impl Intent {
    /// Fixed justification string carried by each intent branch.
    pub fn reason(&self) -> &'static str {
        match self {
            Intent::Pr => "Narrative emphasizes image enhancement and positive brand framing.",
            Intent::Political => {
                "Narrative centers political actors/outcomes and likely seeks opinion shaping."
            }
            Intent::Persuasion => {
                "Direct calls-to-action indicate behavior/belief influence intent."
            }
            Intent::Emotional => {
                "Emotion-heavy wording can pressure judgment over evidence review."
            }
            Intent::Neutral => {
                "Narrative is primarily descriptive without strong directional agenda markers."
            }
        }
    }

    /// Call-to-action / affect-driven intents - largest objectivity penalty.
    pub fn is_directional(&self) -> bool {
        matches!(self, Intent::Persuasion | Intent::Emotional)
    }

    /// Institutional agenda intents (political or brand) - smaller
    /// objectivity penalty, larger propaganda bump.
    pub fn is_institutional(&self) -> bool {
        matches!(self, Intent::Political | Intent::Pr)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Pr => write!(f, "Reputation improvement (PR)"),
            Intent::Political => write!(f, "Political influence"),
            Intent::Persuasion => write!(f, "Persuasion"),
            Intent::Emotional => write!(f, "Emotional manipulation"),
            Intent::Neutral => write!(f, "Neutral information"),
        }
    }
}

/// Terminal label of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalAssessment {
    #[serde(rename = "Likely propaganda")]
    Propaganda,
    #[serde(rename = "Likely PR or reputation management")]
    PrManagement,
    #[serde(rename = "Likely factual reporting")]
    FactualReporting,
    #[serde(rename = "Likely misleading or unreliable")]
    Misleading,
}

impl std::fmt::Display for FinalAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinalAssessment::Propaganda => write!(f, "Likely propaganda"),
            FinalAssessment::PrManagement => write!(f, "Likely PR or reputation management"),
            FinalAssessment::FactualReporting => write!(f, "Likely factual reporting"),
            FinalAssessment::Misleading => write!(f, "Likely misleading or unreliable"),
        }
    }
}

/// Provenance perspective of a reference article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viewpoint {
    #[serde(rename = "Mainstream/reference")]
    Mainstream,
    #[serde(rename = "Academic/independent")]
    Academic,
    #[serde(rename = "Alternative viewpoint")]
    Alternative,
    #[serde(rename = "Obscure/OSINT")]
    Osint,
    #[serde(rename = "Non-mainstream/contrarian")]
    Contrarian,
}

impl std::fmt::Display for Viewpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Viewpoint::Mainstream => write!(f, "Mainstream/reference"),
            Viewpoint::Academic => write!(f, "Academic/independent"),
            Viewpoint::Alternative => write!(f, "Alternative viewpoint"),
            Viewpoint::Osint => write!(f, "Obscure/OSINT"),
            Viewpoint::Contrarian => write!(f, "Non-mainstream/contrarian"),
        }
    }
}

/// One extracted sentence plus its derived judgments.
///
/// Created once per extracted sentence and immutable thereafter. The
/// rationale is generated from the structured fields at construction
/// time so it can never disagree with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimAssessment {
    pub claim: String,
    pub claim_type: ClaimType,
    pub specificity: Specificity,
    pub evidence_status: EvidenceStatus,
    pub verifiability: Verifiability,
    pub rationale: String,
}

/// One external source candidate for triangulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceArticle {
    pub title: String,
    pub source: String,
    pub summary: String,
    /// May be empty for locally generated leads.
    pub link: String,
    pub viewpoint: Viewpoint,
}

impl ReferenceArticle {
    /// Case-insensitive (title, source) pair - the uniqueness key for
    /// merge deduplication.
    pub fn dedup_key(&self) -> (String, String) {
        (
            self.title.trim().to_lowercase(),
            self.source.trim().to_lowercase(),
        )
    }
}

/// Complete output of one pipeline run.
///
/// A value type fully owned by the caller; nothing inside the pipeline
/// retains a reference after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub topic: String,
    /// Extraction order, at most 15 entries.
    pub claims: Vec<ClaimAssessment>,
    /// Merged and deduplicated, at most 14 entries.
    pub references: Vec<ReferenceArticle>,
    pub follow_up_questions: Vec<String>,
    pub intent_label: Intent,
    pub intent_reason: String,
    /// Never empty - a default finding is emitted when no pattern fires.
    pub manipulation_findings: Vec<String>,
    pub objectivity_score: u8,
    pub reliability_score: u8,
    pub propaganda_probability: u8,
    pub final_assessment: FinalAssessment,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_label_round_trips_through_json() {
        let json = serde_json::to_string(&Intent::Pr).unwrap();
        assert_eq!(json, "\"Reputation improvement (PR)\"");
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Intent::Pr);
    }

    #[test]
    fn test_dedup_key_is_case_insensitive() {
        let a = ReferenceArticle {
            title: "Climate Report".to_string(),
            source: "Wikipedia".to_string(),
            summary: String::new(),
            link: String::new(),
            viewpoint: Viewpoint::Mainstream,
        };
        let b = ReferenceArticle {
            title: "  climate report".to_string(),
            source: "WIKIPEDIA ".to_string(),
            summary: "different".to_string(),
            link: "different".to_string(),
            viewpoint: Viewpoint::Academic,
        };
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_display_matches_serde_rename() {
        assert_eq!(
            FinalAssessment::Misleading.to_string(),
            "Likely misleading or unreliable"
        );
        assert_eq!(
            serde_json::to_string(&FinalAssessment::Misleading).unwrap(),
            "\"Likely misleading or unreliable\""
        );
    }
}
