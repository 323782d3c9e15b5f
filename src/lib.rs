//! Entity resolution and visibility ranking for AI-visibility brand
//! monitoring.
//!
//! This crate is the pure core of a brand-monitoring pipeline: it validates
//! and canonicalizes URLs, collapses competitor-name variants to canonical
//! entities, resolves names to best-guess domains, classifies a company's
//! service type, and ranks visibility scores computed upstream. It performs
//! no I/O — every function is a synchronous total transform over values the
//! caller already fetched.

pub mod company;
pub mod config;
pub mod domain_utils;
pub mod known_competitors;
pub mod name_normalizer;
pub mod ranking;
pub mod service_type;

pub use company::{
    Company, CompetitorMetadata, CompetitorRanking, IdentifiedCompetitor, ScrapedData,
};
pub use config::{ConfigError, ResolverConfig};
pub use domain_utils::{clean_competitor_url, display_domain, validate_url};
pub use known_competitors::{assign_url_to_competitor, resolve_domain, ResolvedDomain};
pub use name_normalizer::{dedupe_competitors, normalize_competitor_name, NameNormalizer};
pub use ranking::{enrich_entries, RankedEntity, Standing, VisibilitySummary};
pub use service_type::detect_service_type;
