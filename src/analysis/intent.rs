//! Intent classification - an ordered cascade, first match wins
//!
//! Brand-praise vocabulary is checked before political vocabulary,
//! before calls-to-action, before charged-affect wording; anything
//! else is neutral information. Exactly one label per input, with the
//! fixed justification carried by the [`Intent`] variant.

use crate::models::Intent;
use regex::Regex;
use std::sync::OnceLock;

static PR_CUES: OnceLock<Regex> = OnceLock::new();
static POLITICAL_CUES: OnceLock<Regex> = OnceLock::new();
static PERSUASION_CUES: OnceLock<Regex> = OnceLock::new();
static EMOTIONAL_CUES: OnceLock<Regex> = OnceLock::new();

fn pr_cues() -> &'static Regex {
    PR_CUES.get_or_init(|| {
        Regex::new(
            r"\b(award-winning|industry-leading|trusted brand|our company|our platform|market-leading)\b",
        )
        .expect("valid regex")
    })
}

fn political_cues() -> &'static Regex {
    POLITICAL_CUES.get_or_init(|| {
        Regex::new(r"\b(election|senate|congress|government|party|candidate|policy|minister)\b")
            .expect("valid regex")
    })
}

fn persuasion_cues() -> &'static Regex {
    PERSUASION_CUES.get_or_init(|| {
        Regex::new(r"\b(share this|act now|must|wake up|don't ignore|you need to)\b")
            .expect("valid regex")
    })
}

fn emotional_cues() -> &'static Regex {
    EMOTIONAL_CUES.get_or_init(|| {
        Regex::new(r"\b(shocking|terrifying|betrayal|disaster|outrage|panic)\b")
            .expect("valid regex")
    })
}

/// Infer the communicative purpose of the whole text. The cascade
/// order is significant: a press release that also names a ministry is
/// still PR.
pub fn infer_intent(text: &str) -> Intent {
    let t = text.to_lowercase();

    if pr_cues().is_match(&t) {
        Intent::Pr
    } else if political_cues().is_match(&t) {
        Intent::Political
    } else if persuasion_cues().is_match(&t) {
        Intent::Persuasion
    } else if emotional_cues().is_match(&t) {
        Intent::Emotional
    } else {
        Intent::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pr_vocabulary() {
        let intent = infer_intent("Our company shipped an award-winning product.");
        assert_eq!(intent, Intent::Pr);
    }

    #[test]
    fn test_political_vocabulary() {
        let intent = infer_intent("The senate passed the policy before the election.");
        assert_eq!(intent, Intent::Political);
    }

    #[test]
    fn test_persuasion_vocabulary() {
        let intent = infer_intent("Wake up and share this before it is too late.");
        assert_eq!(intent, Intent::Persuasion);
    }

    #[test]
    fn test_emotional_vocabulary() {
        let intent = infer_intent("A shocking betrayal left the town in panic.");
        assert_eq!(intent, Intent::Emotional);
    }

    #[test]
    fn test_neutral_default() {
        let intent = infer_intent("The bakery opened a second location downtown.");
        assert_eq!(intent, Intent::Neutral);
    }

    #[test]
    fn test_cascade_order_pr_beats_political() {
        // Both vocabularies present; the earlier branch wins.
        let intent = infer_intent("Our company advised the government on the new policy.");
        assert_eq!(intent, Intent::Pr);
    }

    #[test]
    fn test_case_insensitive_via_lowering() {
        let intent = infer_intent("AWARD-WINNING service from OUR COMPANY.");
        assert_eq!(intent, Intent::Pr);
    }

    #[test]
    fn test_every_intent_carries_a_reason() {
        for intent in [
            Intent::Pr,
            Intent::Political,
            Intent::Persuasion,
            Intent::Emotional,
            Intent::Neutral,
        ] {
            assert!(!intent.reason().is_empty());
        }
    }
}
