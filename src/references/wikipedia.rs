//! Encyclopedic lookup against the Wikipedia search API
//!
//! Best-effort: any transport, status, or parse failure becomes
//! [`LookupOutcome::Unavailable`] - never an error to the caller.

use crate::models::{ReferenceArticle, Viewpoint};
use crate::references::{LookupOutcome, ReferenceError};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::warn;

const SEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";

static HTML_TAG: OnceLock<Regex> = OnceLock::new();

fn html_tag() -> &'static Regex {
    HTML_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: QuerySection,
}

#[derive(Deserialize, Default)]
struct QuerySection {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
    /// Snippet with embedded highlight markup to strip.
    #[serde(default)]
    snippet: String,
}

/// Search Wikipedia for the topic, returning up to `limit` candidates.
pub fn lookup(agent: &ureq::Agent, topic: &str, limit: usize) -> LookupOutcome {
    match fetch(agent, topic, limit) {
        Ok(references) => LookupOutcome::Available(references),
        Err(err) => {
            warn!("Wikipedia lookup unavailable (treated as empty): {err}");
            LookupOutcome::Unavailable
        }
    }
}

fn fetch(
    agent: &ureq::Agent,
    topic: &str,
    limit: usize,
) -> Result<Vec<ReferenceArticle>, ReferenceError> {
    let response = agent
        .get(SEARCH_URL)
        .header("User-Agent", crate::references::USER_AGENT)
        .query("action", "query")
        .query("list", "search")
        .query("srsearch", topic)
        .query("format", "json")
        .query("srlimit", &limit.to_string())
        .call()
        .map_err(|e| ReferenceError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(ReferenceError::Status(status));
    }

    let parsed: SearchResponse = response
        .into_body()
        .read_json()
        .map_err(|e| ReferenceError::Malformed(e.to_string()))?;

    Ok(parsed
        .query
        .search
        .into_iter()
        .map(hit_to_reference)
        .collect())
}

fn hit_to_reference(hit: SearchHit) -> ReferenceArticle {
    let title = if hit.title.is_empty() {
        "Unknown".to_string()
    } else {
        hit.title
    };
    let summary = clean_snippet(&hit.snippet);
    let link = format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"));

    ReferenceArticle {
        title,
        source: "Wikipedia".to_string(),
        summary,
        link,
        viewpoint: Viewpoint::Mainstream,
    }
}

/// Strip search-highlight markup and unescape quotes.
fn clean_snippet(snippet: &str) -> String {
    html_tag()
        .replace_all(snippet, "")
        .replace("&quot;", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_snippet_strips_markup() {
        let raw = "the <span class=\"searchmatch\">emissions</span> fell &quot;sharply&quot;";
        assert_eq!(clean_snippet(raw), "the emissions fell \"sharply\"");
    }

    #[test]
    fn test_hit_mapping_builds_page_link() {
        let hit = SearchHit {
            title: "Climate of Germany".to_string(),
            snippet: "overview".to_string(),
        };
        let reference = hit_to_reference(hit);
        assert_eq!(reference.source, "Wikipedia");
        assert_eq!(reference.viewpoint, Viewpoint::Mainstream);
        assert_eq!(
            reference.link,
            "https://en.wikipedia.org/wiki/Climate_of_Germany"
        );
    }

    #[test]
    fn test_empty_title_defaults_to_unknown() {
        let hit = SearchHit {
            title: String::new(),
            snippet: String::new(),
        };
        assert_eq!(hit_to_reference(hit).title, "Unknown");
    }

    #[test]
    fn test_response_parsing_tolerates_missing_fields() {
        let parsed: SearchResponse = serde_json::from_str("{}").expect("parse");
        assert!(parsed.query.search.is_empty());

        let parsed: SearchResponse = serde_json::from_str(
            r#"{"query":{"search":[{"title":"A"},{"snippet":"only snippet"}]}}"#,
        )
        .expect("parse");
        assert_eq!(parsed.query.search.len(), 2);
    }
}
