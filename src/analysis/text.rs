//! Text normalization, sentence segmentation, and candidate extraction
//!
//! Everything here is a total function over arbitrary string input -
//! empty input yields empty output, never an error.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Upper bound on extracted claim candidates per input.
pub const MAX_CLAIMS: usize = 15;

/// Question-branch topics are cut to this many characters.
const MAX_TOPIC_CHARS: usize = 100;

static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static INTERROGATIVE_PREFIX: OnceLock<Regex> = OnceLock::new();
static WORD_TOKEN: OnceLock<Regex> = OnceLock::new();
static ASSERTION_MARKERS: OnceLock<Regex> = OnceLock::new();
static SOURCING_MARKERS: OnceLock<Regex> = OnceLock::new();

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn interrogative_prefix() -> &'static Regex {
    INTERROGATIVE_PREFIX.get_or_init(|| {
        Regex::new(r"^(is|are|do|does|did|can|could|should|would|will|what|why|how|when|where|who)\s+")
            .expect("valid regex")
    })
}

fn word_token() -> &'static Regex {
    WORD_TOKEN.get_or_init(|| Regex::new(r"[a-zA-Z][a-zA-Z'\-]+").expect("valid regex"))
}

fn assertion_markers() -> &'static Regex {
    ASSERTION_MARKERS.get_or_init(|| {
        Regex::new(r"(?i)\b(is|are|was|were|has|have|had|will|confirmed|announced|revealed|caused|leads to|proves|demonstrates)\b")
            .expect("valid regex")
    })
}

fn sourcing_markers() -> &'static Regex {
    SOURCING_MARKERS.get_or_init(|| {
        Regex::new(r"(?i)\b(according to|data shows|study finds|officials said|sources said)\b")
            .expect("valid regex")
    })
}

/// Words too common to anchor a topic.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "for", "from", "with", "that", "this", "have", "has",
    "had", "were", "was", "are", "is", "been", "being", "into", "about", "while", "when", "where",
    "which", "who", "what", "why", "how", "would", "could", "should", "said", "says", "according",
    "reported", "report", "news",
];

/// Collapse whitespace runs to a single space and trim the ends.
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    whitespace().replace_all(text, " ").trim().to_string()
}

/// Split normalized text into sentences after `.`, `!`, or `?` followed
/// by whitespace. Empty fragments are dropped; token content is
/// preserved as-is.
///
/// The regex crate has no lookbehind, so this is a manual scan rather
/// than the `(?<=[.!?])\s+` split the pattern suggests.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut chars = normalized.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    let end = i + c.len_utf8();
                    let fragment = normalized[start..end].trim();
                    if !fragment.is_empty() {
                        sentences.push(fragment.to_string());
                    }
                    start = end;
                }
            }
        }
    }

    let tail = normalized[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Derive a short topic string. Never empty: falls back to
/// "general topic".
///
/// Questions use the text before the first `?` with a leading
/// interrogative stripped; statements use the most frequent content
/// words (descending frequency, first-seen order breaking ties).
pub fn extract_topic(text: &str) -> String {
    let clean = normalize(&text.to_lowercase());

    if clean.contains('?') {
        let question = clean.split('?').next().unwrap_or("");
        let stripped = interrogative_prefix().replace(question, "");
        let truncated: String = stripped.chars().take(MAX_TOPIC_CHARS).collect();
        let topic = truncated.trim().to_string();
        return if topic.is_empty() {
            "general topic".to_string()
        } else {
            topic
        };
    }

    // (count, first-seen index) per token, so ties break deterministically
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (seen, token) in word_token()
        .find_iter(&clean)
        .map(|m| m.as_str())
        .filter(|t| t.len() > 3 && !STOP_WORDS.contains(t))
        .enumerate()
    {
        let entry = counts.entry(token).or_insert((0, seen));
        entry.0 += 1;
    }

    if counts.is_empty() {
        return "general topic".to_string();
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(5)
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Select sentences that read as assertions: at least 4 tokens, not a
/// question, and carrying either an auxiliary/reporting verb or a
/// sourcing phrase. Falls back to the whole normalized input when no
/// sentence qualifies and the input is non-empty, so non-empty input
/// never yields an empty list. Capped at [`MAX_CLAIMS`].
pub fn extract_claim_candidates(text: &str) -> Vec<String> {
    let mut claims = Vec::new();

    for sentence in split_sentences(text) {
        if sentence.split_whitespace().count() < 4 {
            continue;
        }
        if sentence.ends_with('?') {
            continue;
        }
        if assertion_markers().is_match(&sentence) || sourcing_markers().is_match(&sentence) {
            claims.push(sentence);
        }
    }

    if claims.is_empty() && !text.trim().is_empty() {
        claims.push(normalize(text));
    }

    claims.truncate(MAX_CLAIMS);
    claims
}
