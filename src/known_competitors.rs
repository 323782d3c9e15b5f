//! Curated competitor-domain database and heuristic domain synthesis.
//!
//! Detection output frequently names a competitor without a URL. Resolution
//! is layered: configuration overrides, then the curated table of well-known
//! competitors, then heuristic synthesis from the name itself. A synthesized
//! domain is a guess by construction — the [`ResolvedDomain`] type keeps it
//! distinguishable from a curated hit so callers never fetch a guess as if it
//! were ground truth.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ResolverConfig;

/// Curated mapping of canonical competitor name -> bare domain (no scheme).
/// Grouped by category; keys are lowercase and trimmed.
static KNOWN_DOMAINS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        // Web scraping tools
        ("apify", "apify.com"),
        ("scrapy", "scrapy.org"),
        ("octoparse", "octoparse.com"),
        ("parsehub", "parsehub.com"),
        ("diffbot", "diffbot.com"),
        ("import.io", "import.io"),
        ("bright data", "brightdata.com"),
        ("zyte", "zyte.com"),
        ("puppeteer", "pptr.dev"),
        ("playwright", "playwright.dev"),
        ("selenium", "selenium.dev"),
        ("beautiful soup", "pypi.org/project/beautifulsoup4"),
        ("scrapfly", "scrapfly.io"),
        ("crawlbase", "crawlbase.com"),
        ("webharvy", "webharvy.com"),
        // AI companies
        ("openai", "openai.com"),
        ("anthropic", "anthropic.com"),
        ("google ai", "ai.google"),
        ("microsoft azure", "azure.microsoft.com"),
        ("ibm watson", "ibm.com/watson"),
        ("amazon aws", "aws.amazon.com"),
        ("perplexity", "perplexity.ai"),
        ("claude", "anthropic.com"),
        ("chatgpt", "openai.com"),
        ("gemini", "gemini.google.com"),
        // SaaS platforms
        ("salesforce", "salesforce.com"),
        ("hubspot", "hubspot.com"),
        ("zendesk", "zendesk.com"),
        ("slack", "slack.com"),
        ("atlassian", "atlassian.com"),
        ("monday.com", "monday.com"),
        ("notion", "notion.so"),
        ("airtable", "airtable.com"),
        // E-commerce
        ("shopify", "shopify.com"),
        ("woocommerce", "woocommerce.com"),
        ("magento", "magento.com"),
        ("bigcommerce", "bigcommerce.com"),
        ("squarespace", "squarespace.com"),
        ("wix", "wix.com"),
        // Cloud/hosting
        ("vercel", "vercel.com"),
        ("netlify", "netlify.com"),
        ("aws", "aws.amazon.com"),
        ("google cloud", "cloud.google.com"),
        ("azure", "azure.microsoft.com"),
        ("heroku", "heroku.com"),
        ("digitalocean", "digitalocean.com"),
        ("cloudflare", "cloudflare.com"),
    ];
    entries.iter().copied().collect()
});

/// Standalone legal-entity tokens removed before domain synthesis.
static LEGAL_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(the|inc|llc|ltd|co|corp|company|corporation)\b")
        .expect("legal token pattern is valid")
});

/// Characters outside [a-z0-9\s], stripped before domain synthesis.
static NON_ALNUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("charset pattern is valid"));

/// A resolved competitor domain, tagged by provenance.
///
/// `Curated` comes from the lookup table (or a configuration override) and
/// can be trusted as the competitor's canonical address. `Synthesized` is a
/// heuristic guess derived from the name; it must be confirmed before being
/// treated as reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "domain", rename_all = "lowercase")]
pub enum ResolvedDomain {
    Curated(String),
    Synthesized(String),
}

impl ResolvedDomain {
    /// The bare domain string, regardless of provenance.
    pub fn domain(&self) -> &str {
        match self {
            ResolvedDomain::Curated(domain) | ResolvedDomain::Synthesized(domain) => domain,
        }
    }

    /// Whether this came from the curated table rather than synthesis.
    pub fn is_curated(&self) -> bool {
        matches!(self, ResolvedDomain::Curated(_))
    }
}

/// Competitor-domain resolver with optional configuration overrides.
#[derive(Debug, Clone, Default)]
pub struct KnownCompetitors {
    /// Overrides consulted before the built-in table (lowercase name -> domain).
    overrides: HashMap<String, String>,
}

impl KnownCompetitors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver whose overrides come from configuration. Override
    /// keys are lowercased so lookups stay case-insensitive.
    pub fn with_config(config: &ResolverConfig) -> Self {
        let overrides = config
            .domains
            .iter()
            .map(|(name, domain)| (name.trim().to_lowercase(), domain.clone()))
            .collect();
        Self { overrides }
    }

    /// Resolve a competitor name to a domain.
    ///
    /// Lookup priority: configuration overrides, then the curated table, then
    /// heuristic synthesis. Empty input and unusably short synthesis results
    /// yield `None`.
    pub fn resolve(&self, name: &str) -> Option<ResolvedDomain> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if let Some(domain) = self.overrides.get(&normalized) {
            debug!("Resolved '{}' to '{}' via override", name, domain);
            return Some(ResolvedDomain::Curated(domain.clone()));
        }

        if let Some(domain) = KNOWN_DOMAINS.get(normalized.as_str()) {
            debug!("Resolved '{}' to '{}' via curated table", name, domain);
            return Some(ResolvedDomain::Curated((*domain).to_string()));
        }

        synthesize_domain(&normalized).map(ResolvedDomain::Synthesized)
    }
}

/// Resolve a competitor name to a domain using the built-in table only.
pub fn resolve_domain(name: &str) -> Option<ResolvedDomain> {
    KnownCompetitors::new().resolve(name)
}

/// Flat convenience contract: the resolved domain as a bare string, curated
/// or guessed. Callers that need to distinguish provenance use
/// [`resolve_domain`].
pub fn assign_url_to_competitor(name: &str) -> Option<String> {
    resolve_domain(name).map(|resolved| resolved.domain().to_string())
}

/// Derive a plausible `.com` domain from a company name.
///
/// Expects lowercased input. Replaces `&` with "and", drops standalone
/// legal-entity tokens, strips everything outside `[a-z0-9\s]`, collapses
/// whitespace, then joins the remaining words. Guesses shorter than 3
/// characters are suppressed as unusable.
fn synthesize_domain(normalized: &str) -> Option<String> {
    let with_and = normalized.replace('&', " and ");
    let without_legal = LEGAL_TOKENS.replace_all(&with_and, " ");
    let alnum_only = NON_ALNUM.replace_all(&without_legal, " ");

    let cleaned = alnum_only.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    let compact: String = cleaned.split_whitespace().collect();
    if compact.len() < 3 {
        return None;
    }

    Some(format!("{}.com", compact))
}
