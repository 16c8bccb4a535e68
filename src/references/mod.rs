//! Reference triangulation across differently-sourced lookups
//!
//! Queries an encyclopedic source and a scholarly source concurrently,
//! appends locally generated alternative/OSINT leads, then merges in
//! source-priority order, deduplicates by case-insensitive
//! (title, source), and caps the list. Lookup failures are represented
//! as [`LookupOutcome::Unavailable`], logged, and treated as empty -
//! they never abort the pipeline.

pub mod cache;
mod crossref;
mod wikipedia;

use crate::models::{ReferenceArticle, Viewpoint};
use cache::LookupCache;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Upper bound on the merged reference list.
pub const MAX_REFERENCES: usize = 14;

/// Identifies us to the lookup services.
pub(crate) const USER_AGENT: &str = concat!("narrascope/", env!("CARGO_PKG_VERSION"));

/// What a single lookup produced. `Unavailable` preserves the fact
/// that a source failed (timeout, transport, malformed payload) even
/// though the merge treats it the same as an empty result.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Available(Vec<ReferenceArticle>),
    Unavailable,
}

impl LookupOutcome {
    /// References to merge: an unavailable source contributes none.
    fn into_references(self) -> Vec<ReferenceArticle> {
        match self {
            LookupOutcome::Available(references) => references,
            LookupOutcome::Unavailable => Vec::new(),
        }
    }

    /// True when the source yielded at least one candidate.
    fn is_productive(&self) -> bool {
        matches!(self, LookupOutcome::Available(references) if !references.is_empty())
    }
}

/// Why a lookup did not produce a payload.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Knobs for the live lookups.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Per-lookup timeout, single-digit seconds.
    pub timeout_secs: u64,
    /// Candidates requested from each live source.
    pub per_source_limit: usize,
    /// Skip live lookups entirely; both sources report unavailable.
    pub offline: bool,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 8,
            per_source_limit: 4,
            offline: false,
        }
    }
}

/// Finds and merges triangulation references for a topic. Owns the
/// shared HTTP agent and the bounded lookup cache - the only state
/// that survives across pipeline invocations.
pub struct ReferenceFinder {
    agent: ureq::Agent,
    cache: LookupCache,
    settings: LookupSettings,
}

impl ReferenceFinder {
    pub fn new(settings: LookupSettings) -> Self {
        Self::with_cache(settings, LookupCache::default())
    }

    /// Inject a pre-populated or specially sized cache (tests, warm starts).
    pub fn with_cache(settings: LookupSettings, cache: LookupCache) -> Self {
        let agent = make_agent(settings.timeout_secs);
        Self {
            agent,
            cache,
            settings,
        }
    }

    /// Triangulate references for the topic: cache → concurrent live
    /// lookups → local perspectives → merge, dedup, cap.
    pub fn find_references(&self, topic: &str) -> Vec<ReferenceArticle> {
        if let Some(cached) = self.cache.get(topic) {
            debug!(topic = %topic, "reference cache hit");
            return (*cached).clone();
        }

        let (encyclopedic, scholarly) = if self.settings.offline {
            (LookupOutcome::Unavailable, LookupOutcome::Unavailable)
        } else {
            rayon::join(
                || wikipedia::lookup(&self.agent, topic, self.settings.per_source_limit),
                || crossref::lookup(&self.agent, topic, self.settings.per_source_limit),
            )
        };

        let references = triangulate(topic, encyclopedic, scholarly);
        info!(
            topic = %topic,
            count = references.len(),
            "reference triangulation complete"
        );
        self.cache.insert(topic, references.clone());
        references
    }
}

fn make_agent(timeout_secs: u64) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(std::time::Duration::from_secs(timeout_secs)))
        .build()
        .new_agent()
}

/// Merge lookup outcomes with the locally generated perspectives:
/// mainstream → scholarly → alternative/OSINT, plus offline index
/// leads when both live sources came up dry. Dedup keeps the first
/// occurrence, so earlier sources win ties; the result is capped at
/// [`MAX_REFERENCES`].
fn triangulate(
    topic: &str,
    encyclopedic: LookupOutcome,
    scholarly: LookupOutcome,
) -> Vec<ReferenceArticle> {
    let both_dry = !encyclopedic.is_productive() && !scholarly.is_productive();

    let mut candidates = encyclopedic.into_references();
    candidates.extend(scholarly.into_references());
    candidates.extend(local_perspectives(topic));
    if both_dry {
        candidates.extend(offline_fallback(topic));
    }

    let mut merged = dedup_references(candidates);
    merged.truncate(MAX_REFERENCES);
    merged
}

/// Drop later entries sharing a case-insensitive (title, source) key.
fn dedup_references(references: Vec<ReferenceArticle>) -> Vec<ReferenceArticle> {
    let mut seen = HashSet::new();
    references
        .into_iter()
        .filter(|r| seen.insert(r.dedup_key()))
        .collect()
}

/// Fixed non-mainstream leads, generated locally so perspective
/// coverage survives even when every external service is unreachable.
fn local_perspectives(topic: &str) -> Vec<ReferenceArticle> {
    vec![
        ReferenceArticle {
            title: format!("Independent analyses on {topic}"),
            source: "Independent newsletters and investigative blogs".to_string(),
            summary: "Check whether authors provide raw evidence, primary sources, and \
                      transparent methodology."
                .to_string(),
            link: search_link(&format!("{topic} independent analysis")),
            viewpoint: Viewpoint::Alternative,
        },
        ReferenceArticle {
            title: format!("OSINT discussion threads about {topic}"),
            source: "Open-source intelligence communities".to_string(),
            summary: "Useful for chronology checks, geolocation, and media provenance \
                      verification."
                .to_string(),
            link: search_link(&format!("{topic} osint discussion")),
            viewpoint: Viewpoint::Osint,
        },
        ReferenceArticle {
            title: format!("Contrarian commentary clusters: {topic}"),
            source: "Niche forums and alternative media".to_string(),
            summary: "Use only with corroboration; identify where claims diverge from \
                      mainstream or primary-source evidence."
                .to_string(),
            link: search_link(&format!("{topic} alternative viewpoint")),
            viewpoint: Viewpoint::Contrarian,
        },
    ]
}

/// Search-index leads appended when both live sources yielded nothing,
/// so the report still carries mainstream and academic starting points.
fn offline_fallback(topic: &str) -> Vec<ReferenceArticle> {
    vec![
        ReferenceArticle {
            title: format!("Mainstream coverage index: {topic}"),
            source: "News search".to_string(),
            summary: "Fallback index for mainstream reporting when APIs are unavailable."
                .to_string(),
            link: search_link(&format!(
                "{topic} site:reuters.com OR site:apnews.com OR site:bbc.com"
            )),
            viewpoint: Viewpoint::Mainstream,
        },
        ReferenceArticle {
            title: format!("Academic index: {topic}"),
            source: "Google Scholar".to_string(),
            summary: "Fallback academic search index when Crossref access is unavailable."
                .to_string(),
            link: format!(
                "https://scholar.google.com/scholar?q={}",
                topic.replace(' ', "+")
            ),
            viewpoint: Viewpoint::Academic,
        },
    ]
}

fn search_link(query: &str) -> String {
    format!("https://duckduckgo.com/?q={}", query.replace(' ', "+"))
}
