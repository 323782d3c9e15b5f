//! Data model for one brand-monitoring analysis run.
//!
//! Every type here is a plain immutable value constructed by the callers
//! (scraping/detection pipeline, upstream score aggregation) and read by the
//! transform functions in this crate. Nothing in this module is mutated after
//! construction; the transforms produce new values.

use serde::{Deserialize, Serialize};

/// Content captured from a company's website by the (external) scraping step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedData {
    /// Main textual content of the landing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_content: Option<String>,
    /// Keywords extracted from page metadata.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// The tracked brand or a competitor, as scraped/derived upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit favicon URL, when the scraper found one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Explicit logo URL, when the scraper found one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_data: Option<ScrapedData>,
}

impl Company {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: None,
            favicon: None,
            logo: None,
            scraped_data: None,
        }
    }
}

/// Display metadata attached to a detected competitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

/// A competitor produced by the external AI-detection step.
///
/// The name is the join key back to ranking entries (case-insensitive after
/// normalization).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiedCompetitor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CompetitorMetadata>,
}

impl IdentifiedCompetitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            metadata: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// One scored entity (brand or competitor) for one analysis run.
///
/// `visibility_score` is a 0–100 metric computed by the upstream
/// multi-provider aggregation; this crate only ranks and diffs it.
/// `is_own` marks the tracked brand; a well-formed run contains exactly one
/// such entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRanking {
    pub name: String,
    pub visibility_score: f64,
    pub is_own: bool,
}

impl CompetitorRanking {
    pub fn new(name: impl Into<String>, visibility_score: f64, is_own: bool) -> Self {
        Self {
            name: name.into(),
            visibility_score,
            is_own,
        }
    }
}
