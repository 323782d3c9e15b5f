//! Competitor name canonicalization.
//!
//! AI-detection output spells the same competitor many ways ("Amazon Web
//! Services", "amazon web services (aws)", "AWS"). Everything downstream —
//! URL resolution, the ranking join, dedup — keys on one canonical lowercase
//! name, produced here via a fixed synonym table with optional configuration
//! overlays.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::company::IdentifiedCompetitor;
use crate::config::ResolverConfig;
use crate::known_competitors;

/// Built-in synonym table: spelling variant -> canonical name.
/// Keys and values are lowercase and trimmed.
const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("amazon web services", "aws"),
    ("amazon web services (aws)", "aws"),
    ("amazon aws", "aws"),
    ("microsoft azure", "azure"),
    ("google cloud platform", "google cloud"),
    ("google cloud platform (gcp)", "google cloud"),
    ("gcp", "google cloud"),
    ("digital ocean", "digitalocean"),
    ("beautiful soup", "beautifulsoup"),
    ("bright data", "brightdata"),
];

/// Name normalizer with a built-in synonym table and configurable overrides.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    /// Map of lowercase variant -> canonical lowercase name.
    synonyms: HashMap<String, String>,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NameNormalizer {
    /// Create a normalizer with the built-in synonym table.
    pub fn new() -> Self {
        let synonyms = BUILTIN_SYNONYMS
            .iter()
            .map(|(variant, canonical)| (variant.to_string(), canonical.to_string()))
            .collect();
        Self { synonyms }
    }

    /// Create a normalizer with configuration overlays applied on top of the
    /// built-in table. Config keys/values are lowercased before insertion so
    /// lookups stay case-insensitive.
    pub fn with_config(config: &ResolverConfig) -> Self {
        let mut normalizer = Self::new();
        for (variant, canonical) in &config.aliases {
            normalizer.add_alias(variant, canonical);
        }
        normalizer
    }

    /// Add a synonym mapping. Later additions override earlier ones.
    pub fn add_alias(&mut self, variant: &str, canonical: &str) {
        self.synonyms.insert(
            variant.trim().to_lowercase(),
            canonical.trim().to_lowercase(),
        );
    }

    /// Map a name variant to its canonical lowercase form.
    ///
    /// Lowercases and trims, then consults the synonym table; a miss returns
    /// the lowercased/trimmed input unchanged. Idempotent as long as no table
    /// entry maps a canonical name onto a different one.
    pub fn normalize(&self, name: &str) -> String {
        let normalized = name.trim().to_lowercase();

        if let Some(canonical) = self.synonyms.get(&normalized) {
            debug!("Normalized '{}' to '{}' via synonym table", name, canonical);
            return canonical.clone();
        }

        normalized
    }
}

/// Process-wide default normalizer (built-in table only).
static DEFAULT_NORMALIZER: OnceLock<NameNormalizer> = OnceLock::new();

fn default_normalizer() -> &'static NameNormalizer {
    DEFAULT_NORMALIZER.get_or_init(NameNormalizer::new)
}

/// Normalize a competitor name using the default synonym table.
pub fn normalize_competitor_name(name: &str) -> String {
    default_normalizer().normalize(name)
}

/// Collapse detected competitors whose names normalize to the same canonical
/// entity.
///
/// The first occurrence wins; later duplicates only contribute their URL and
/// metadata when the kept entry is missing them. Entries without a URL get a
/// best-guess domain from the curated/heuristic resolver — a suggestion, not
/// a verified address.
pub fn dedupe_competitors(competitors: Vec<IdentifiedCompetitor>) -> Vec<IdentifiedCompetitor> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<IdentifiedCompetitor> = Vec::new();

    for competitor in competitors {
        let key = normalize_competitor_name(&competitor.name);
        if key.is_empty() {
            continue;
        }

        match seen.get(&key) {
            Some(&idx) => {
                let kept = &mut merged[idx];
                if kept.url.is_none() {
                    kept.url = competitor.url;
                }
                if kept.metadata.is_none() {
                    kept.metadata = competitor.metadata;
                }
                debug!("Merged duplicate competitor '{}' into '{}'", competitor.name, kept.name);
            }
            None => {
                seen.insert(key, merged.len());
                merged.push(competitor);
            }
        }
    }

    // Fill missing URLs with resolver suggestions
    for competitor in &mut merged {
        if competitor.url.is_none() {
            competitor.url = known_competitors::assign_url_to_competitor(&competitor.name);
        }
    }

    merged
}
