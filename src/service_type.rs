//! Company service-type classification.
//!
//! Labels the tracked brand with one industry/category string for report and
//! prompt generation. The cascade is an ordered priority list: a company
//! matching several categories' keywords gets the first matching label, and
//! the order encodes business intent — a beverage brand that mentions
//! "ai-powered" on its site is still a beverage brand.

use crate::company::Company;

/// One classification rule. Keyword sets are checked as substrings of the
/// lowercased description, main content, and (beverage only) company name.
struct CategoryRule {
    label: &'static str,
    description_keywords: &'static [&'static str],
    content_keywords: &'static [&'static str],
    name_keywords: &'static [&'static str],
}

/// Ordered rules, highest priority first. Order must not be changed without
/// product sign-off; it is a tie-break policy, not an optimization.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        label: "beverage brand",
        description_keywords: &["beverage", "drink", "cola", "soda"],
        content_keywords: &["beverage", "refreshment"],
        // The one rule that also inspects the company name.
        name_keywords: &["coca", "pepsi"],
    },
    CategoryRule {
        label: "restaurant",
        description_keywords: &["restaurant", "food", "dining"],
        content_keywords: &["menu", "restaurant"],
        name_keywords: &[],
    },
    CategoryRule {
        label: "retailer",
        description_keywords: &["retail", "store", "shopping"],
        content_keywords: &["retail", "shopping"],
        name_keywords: &[],
    },
    CategoryRule {
        label: "financial service",
        description_keywords: &["bank", "financial", "finance"],
        content_keywords: &["banking", "financial services"],
        name_keywords: &[],
    },
    CategoryRule {
        label: "web scraper",
        description_keywords: &["scraping", "crawl", "extract"],
        content_keywords: &["web scraping", "data extraction"],
        name_keywords: &[],
    },
    CategoryRule {
        label: "AI tool",
        description_keywords: &["ai", "artificial intelligence", "llm"],
        content_keywords: &["machine learning", "ai-powered"],
        name_keywords: &[],
    },
    CategoryRule {
        label: "hosting platform",
        description_keywords: &["hosting", "deploy", "cloud"],
        content_keywords: &["deployment", "infrastructure"],
        name_keywords: &[],
    },
    CategoryRule {
        label: "e-commerce platform",
        description_keywords: &["e-commerce", "online store", "marketplace"],
        content_keywords: &[],
        name_keywords: &[],
    },
    CategoryRule {
        label: "software",
        description_keywords: &["software", "saas", "platform"],
        content_keywords: &[],
        name_keywords: &[],
    },
];

/// Fallback label when no rule matches.
const DEFAULT_LABEL: &str = "brand";

impl CategoryRule {
    fn matches(&self, description: &str, content: &str, name: &str) -> bool {
        self.description_keywords
            .iter()
            .any(|kw| description.contains(kw))
            || self.content_keywords.iter().any(|kw| content.contains(kw))
            || self.name_keywords.iter().any(|kw| name.contains(kw))
    }
}

/// Classify a company's service type from its textual metadata.
///
/// Evaluates the ordered rules and returns the first matching label;
/// `"brand"` when nothing matches. Total: missing description/content simply
/// contribute nothing.
pub fn detect_service_type(company: &Company) -> &'static str {
    let description = company
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let content = company
        .scraped_data
        .as_ref()
        .and_then(|s| s.main_content.as_deref())
        .unwrap_or_default()
        .to_lowercase();
    let name = company.name.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&description, &content, &name))
        .map(|rule| rule.label)
        .unwrap_or(DEFAULT_LABEL)
}
