//! Scholarly lookup against the Crossref works API
//!
//! Same failure contract as the encyclopedic lookup: anything short of
//! a parsed payload becomes [`LookupOutcome::Unavailable`].

use crate::models::{ReferenceArticle, Viewpoint};
use crate::references::{LookupOutcome, ReferenceError};
use serde::Deserialize;
use tracing::warn;

const WORKS_URL: &str = "https://api.crossref.org/works";

#[derive(Deserialize)]
struct WorksResponse {
    #[serde(default)]
    message: Message,
}

#[derive(Deserialize, Default)]
struct Message {
    #[serde(default)]
    items: Vec<Work>,
}

#[derive(Deserialize)]
struct Work {
    /// Crossref titles are arrays; the first entry is the work title.
    #[serde(default)]
    title: Vec<String>,
    #[serde(default, rename = "container-title")]
    container_title: Vec<String>,
    #[serde(default, rename = "DOI")]
    doi: String,
}

/// Search Crossref for works matching the topic title.
pub fn lookup(agent: &ureq::Agent, topic: &str, limit: usize) -> LookupOutcome {
    match fetch(agent, topic, limit) {
        Ok(references) => LookupOutcome::Available(references),
        Err(err) => {
            warn!("Crossref lookup unavailable (treated as empty): {err}");
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
        .get(WORKS_URL)
        .header("User-Agent", crate::references::USER_AGENT)
        .query("query.title", topic)
        .query("rows", &limit.to_string())
        .call()
        .map_err(|e| ReferenceError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(ReferenceError::Status(status));
    }

    let parsed: WorksResponse = response
        .into_body()
        .read_json()
        .map_err(|e| ReferenceError::Malformed(e.to_string()))?;

    Ok(parsed
        .message
        .items
        .into_iter()
        .take(limit)
        .map(work_to_reference)
        .collect())
}

fn work_to_reference(work: Work) -> ReferenceArticle {
    let title = work
        .title
        .into_iter()
        .next()
        .unwrap_or_else(|| "Untitled".to_string());
    let source = work
        .container_title
        .into_iter()
        .next()
        .unwrap_or_else(|| "Academic publication".to_string());
    let link = if work.doi.is_empty() {
        String::new()
    } else {
        format!("https://doi.org/{}", work.doi)
    };

    ReferenceArticle {
        title,
        source,
        summary: "Academic/technical reference that may support or challenge key claims."
            .to_string(),
        link,
        viewpoint: Viewpoint::Academic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_mapping_uses_first_title_and_container() {
        let work = Work {
            title: vec!["Emission trends".to_string(), "alt".to_string()],
            container_title: vec!["Climate Journal".to_string()],
            doi: "10.1000/example".to_string(),
        };
        let reference = work_to_reference(work);
        assert_eq!(reference.title, "Emission trends");
        assert_eq!(reference.source, "Climate Journal");
        assert_eq!(reference.link, "https://doi.org/10.1000/example");
        assert_eq!(reference.viewpoint, Viewpoint::Academic);
    }

    #[test]
    fn test_work_mapping_defaults() {
        let work = Work {
            title: vec![],
            container_title: vec![],
            doi: String::new(),
        };
        let reference = work_to_reference(work);
        assert_eq!(reference.title, "Untitled");
        assert_eq!(reference.source, "Academic publication");
        assert!(reference.link.is_empty());
    }

    #[test]
    fn test_response_parsing_tolerates_missing_fields() {
        let parsed: WorksResponse = serde_json::from_str("{}").expect("parse");
        assert!(parsed.message.items.is_empty());

        let parsed: WorksResponse = serde_json::from_str(
            r#"{"message":{"items":[{"title":["A"],"DOI":"10.1/x"},{"container-title":["J"]}]}}"#,
        )
        .expect("parse");
        assert_eq!(parsed.message.items.len(), 2);
    }
}
