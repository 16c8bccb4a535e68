//! Follow-up investigation question synthesis
//!
//! A fixed base list of five questions, then conditional appends in
//! fixed order: a topic-specific question when claims were extracted,
//! and a framing-vs-fact question when more than one manipulation
//! finding fired.

use crate::models::ClaimAssessment;

const BASE_QUESTIONS: &[&str] = &[
    "What primary evidence (documents, datasets, official statements, or raw media) supports each major claim?",
    "Which independent sources outside the original narrative ecosystem confirm or challenge these claims?",
    "Who benefits materially, politically, or reputationally if this narrative is accepted?",
    "Are there chronology gaps, context omissions, or attribution ambiguities affecting interpretation?",
    "Which claim can be falsified fastest, and what test would disprove it?",
];

/// Build the ordered follow-up question list.
pub fn build_follow_up_questions(
    topic: &str,
    claims: &[ClaimAssessment],
    manipulation_findings: &[String],
) -> Vec<String> {
    let mut questions: Vec<String> = BASE_QUESTIONS.iter().map(|q| q.to_string()).collect();

    if !claims.is_empty() {
        questions.push(format!(
            "For '{topic}', which extracted claim has the strongest evidence chain and which has the weakest?"
        ));
    }
    if manipulation_findings.len() > 1 {
        questions.push(
            "Which statements rely more on framing/emotion than directly verifiable facts?"
                .to_string(),
        );
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::claims::assess_claim;

    #[test]
    fn test_base_questions_always_present() {
        let questions = build_follow_up_questions("topic", &[], &[]);
        assert_eq!(questions.len(), 5);
        assert!(questions[0].contains("primary evidence"));
        assert!(questions[4].contains("falsified"));
    }

    #[test]
    fn test_topic_question_appended_when_claims_exist() {
        let claims = vec![assess_claim("The dam was completed in 1998.")];
        let questions = build_follow_up_questions("dam construction", &claims, &[]);
        assert_eq!(questions.len(), 6);
        assert!(questions[5].contains("dam construction"));
    }

    #[test]
    fn test_framing_question_needs_multiple_findings() {
        let one = vec!["finding".to_string()];
        let two = vec!["finding".to_string(), "another".to_string()];
        assert_eq!(build_follow_up_questions("t", &[], &one).len(), 5);
        let questions = build_follow_up_questions("t", &[], &two);
        assert_eq!(questions.len(), 6);
        assert!(questions[5].contains("framing/emotion"));
    }

    #[test]
    fn test_append_order_is_fixed() {
        let claims = vec![assess_claim("The dam was completed in 1998.")];
        let findings = vec!["a".to_string(), "b".to_string()];
        let questions = build_follow_up_questions("dams", &claims, &findings);
        assert_eq!(questions.len(), 7);
        assert!(questions[5].contains("dams"));
        assert!(questions[6].contains("framing/emotion"));
    }
}
