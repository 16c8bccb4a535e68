//! Narrascope - narrative intelligence reports from free-form text
//!
//! Takes a news excerpt, claim, or question and produces a structured
//! intelligence report: the apparent topic, extracted claims scored
//! for verifiability, inferred authorial intent, detected manipulation
//! patterns, three 0-100 risk/quality scores, a final qualitative
//! label, follow-up investigation questions, and triangulated
//! reference sources.
//!
//! All classification is deterministic pattern/threshold logic - the
//! pipeline estimates how checkable a narrative is, never whether it
//! is true.
//!
//! # Example
//!
//! ```rust,ignore
//! use narrascope::analysis::Analyzer;
//! use narrascope::references::{LookupSettings, ReferenceFinder};
//!
//! let finder = ReferenceFinder::new(LookupSettings::default());
//! let report = Analyzer::new(finder)
//!     .analyze("According to a 2023 report, emissions fell by 23% in Germany.");
//! println!("{}", report.final_assessment);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod models;
pub mod references;
pub mod reporters;
