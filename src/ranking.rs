//! Visibility ranking and display enrichment.
//!
//! Takes the per-entity visibility scores computed upstream and produces the
//! derived values the report/UI layer renders: rank order, the gap to the
//! leading competitor, and best-effort display metadata (favicon, logo guess,
//! chart color). Enrichment never fails the computation — a derivation that
//! goes wrong just leaves its field empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::company::{Company, CompetitorRanking, IdentifiedCompetitor};
use crate::domain_utils::display_domain;

/// Color reserved for the tracked brand's own entry, matching the platform
/// theme. Competitors never receive it.
pub const BRAND_COLOR: &str = "#155DFC";

/// Chart palette for competitor entries; assignment cycles after 8.
pub const CHART_COLORS: [&str; 8] = [
    "#3B82F6", // Blue 500
    "#8B5CF6", // Violet 500
    "#EC4899", // Pink 500
    "#10B981", // Emerald 500
    "#F59E0B", // Amber 500
    "#6366F1", // Indigo 500
    "#14B8A6", // Teal 500
    "#F43F5E", // Rose 500
];

/// The brand's standing relative to the leading competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Positive gap: the brand leads and the top competitor is #2.
    Ahead,
    /// Negative gap: a competitor holds #1.
    Behind,
    /// Zero gap, including the no-competitors case.
    Equal,
}

impl Standing {
    fn from_gap(gap: f64) -> Self {
        if gap > 0.0 {
            Standing::Ahead
        } else if gap < 0.0 {
            Standing::Behind
        } else {
            Standing::Equal
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Standing::Ahead => "ahead of #2",
            Standing::Behind => "behind #1",
            Standing::Equal => "equal to #1",
        };
        write!(f, "{}", s)
    }
}

/// Derived ranking values for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisibilitySummary {
    /// All entries, sorted by visibility score descending (stable: ties keep
    /// input order).
    pub entries: Vec<CompetitorRanking>,
    /// 1-based position of the tracked brand in the sorted order.
    pub brand_rank: usize,
    /// Highest-scoring entry with `is_own = false`, if any competitor exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_competitor: Option<CompetitorRanking>,
    /// Brand score minus top-competitor score; 0.0 without competitors.
    pub score_gap: f64,
    /// Presentation classification of the gap.
    pub standing: Standing,
}

impl VisibilitySummary {
    /// Compute rank order and the leader gap.
    ///
    /// Returns `None` when no entry is marked `is_own` — a violated input
    /// invariant handled totally rather than panicking. When more than one
    /// entry is marked own (also an invariant violation), the first in input
    /// order counts as the brand.
    pub fn compute(rankings: &[CompetitorRanking]) -> Option<VisibilitySummary> {
        let brand_idx = rankings.iter().position(|r| r.is_own)?;
        let brand_score = rankings[brand_idx].visibility_score;

        // Sort indices so the brand entry can be tracked through the reorder;
        // sort_by is stable and total_cmp keeps the ordering total even for NaN
        let mut order: Vec<usize> = (0..rankings.len()).collect();
        order.sort_by(|&a, &b| {
            rankings[b]
                .visibility_score
                .total_cmp(&rankings[a].visibility_score)
        });

        let entries: Vec<CompetitorRanking> =
            order.iter().map(|&i| rankings[i].clone()).collect();
        let brand_rank = order.iter().position(|&i| i == brand_idx)? + 1;

        let top_competitor = entries.iter().find(|e| !e.is_own).cloned();
        let score_gap = top_competitor
            .as_ref()
            .map(|top| brand_score - top.visibility_score)
            .unwrap_or(0.0);

        Some(VisibilitySummary {
            entries,
            brand_rank,
            top_competitor,
            score_gap,
            standing: Standing::from_gap(score_gap),
        })
    }

    /// The leading `n` entries in sorted order; the UI renders at most 8.
    pub fn top_entries(&self, n: usize) -> &[CompetitorRanking] {
        &self.entries[..self.entries.len().min(n)]
    }
}

/// One ranking entry enriched with display metadata. Every enrichment field
/// is optional; consumers must tolerate absence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntity {
    pub name: String,
    pub visibility_score: f64,
    pub is_own: bool,
    /// 1-based position in the sorted order.
    pub rank: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Chart color: the brand color for the own entry, otherwise assigned by
    /// sorted position.
    pub color: String,
}

/// Favicon URL for a domain, via the Google favicon service.
pub fn favicon_url(domain: &str) -> String {
    format!("https://www.google.com/s2/favicons?domain={}&sz=64", domain)
}

/// Best-guess logo URL for a domain (conventional apple-touch-icon path).
/// A guess, not a verified asset; the UI falls back when it 404s.
pub fn logo_guess_url(domain: &str) -> String {
    format!("https://{}/apple-touch-icon.png", domain)
}

/// Chart color for a sorted position, cycling through the palette.
pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Attach display metadata to every entry of a computed summary.
///
/// The brand entry prefers the company's explicit favicon/logo; competitor
/// entries prefer the favicon from their detection metadata (joined on
/// case-insensitive name). Everything else is derived from the entity's URL,
/// and a failed derivation leaves the field `None`.
pub fn enrich_entries(
    summary: &VisibilitySummary,
    identified: &[IdentifiedCompetitor],
    company: Option<&Company>,
) -> Vec<RankedEntity> {
    let brand_domain = company.and_then(|c| display_domain(&c.url));
    let brand_favicon = company
        .and_then(|c| c.favicon.clone())
        .or_else(|| brand_domain.as_deref().map(favicon_url));
    let brand_logo = company
        .and_then(|c| c.logo.clone())
        .or_else(|| brand_domain.as_deref().map(logo_guess_url));

    summary
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let (domain, favicon, logo) = if entry.is_own {
                (brand_domain.clone(), brand_favicon.clone(), brand_logo.clone())
            } else {
                let detected = identified
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(&entry.name));
                let domain = detected
                    .and_then(|c| c.url.as_deref())
                    .and_then(display_domain);
                let favicon = detected
                    .and_then(|c| c.metadata.as_ref())
                    .and_then(|m| m.favicon.clone())
                    .or_else(|| domain.as_deref().map(favicon_url));
                let logo = domain.as_deref().map(logo_guess_url);
                (domain, favicon, logo)
            };

            RankedEntity {
                name: entry.name.clone(),
                visibility_score: entry.visibility_score,
                is_own: entry.is_own,
                rank: idx + 1,
                domain,
                favicon,
                logo,
                color: if entry.is_own {
                    BRAND_COLOR.to_string()
                } else {
                    chart_color(idx).to_string()
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::CompetitorMetadata;

    fn three_entry_run() -> Vec<CompetitorRanking> {
        vec![
            CompetitorRanking::new("Brand", 40.0, true),
            CompetitorRanking::new("X", 55.0, false),
            CompetitorRanking::new("Y", 30.0, false),
        ]
    }

    // =========================================================================
    // Tests for rank and gap computation
    // =========================================================================

    #[test]
    fn test_brand_behind_leader() {
        let summary = VisibilitySummary::compute(&three_entry_run()).unwrap();

        assert_eq!(summary.brand_rank, 2);
        assert_eq!(summary.score_gap, -15.0);
        assert_eq!(summary.standing, Standing::Behind);
        assert_eq!(summary.standing.to_string(), "behind #1");
        assert_eq!(summary.top_competitor.as_ref().unwrap().name, "X");

        let names: Vec<&str> = summary.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["X", "Brand", "Y"]);
    }

    #[test]
    fn test_brand_ahead_of_field() {
        let rankings = vec![
            CompetitorRanking::new("Brand", 70.0, true),
            CompetitorRanking::new("X", 55.0, false),
        ];
        let summary = VisibilitySummary::compute(&rankings).unwrap();

        assert_eq!(summary.brand_rank, 1);
        assert_eq!(summary.score_gap, 15.0);
        assert_eq!(summary.standing, Standing::Ahead);
        assert_eq!(summary.standing.to_string(), "ahead of #2");
    }

    #[test]
    fn test_brand_alone() {
        let rankings = vec![CompetitorRanking::new("Brand", 40.0, true)];
        let summary = VisibilitySummary::compute(&rankings).unwrap();

        assert_eq!(summary.brand_rank, 1);
        assert!(summary.top_competitor.is_none());
        assert_eq!(summary.score_gap, 0.0);
        assert_eq!(summary.standing, Standing::Equal);
        assert_eq!(summary.standing.to_string(), "equal to #1");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rankings = vec![
            CompetitorRanking::new("A", 50.0, false),
            CompetitorRanking::new("Brand", 50.0, true),
            CompetitorRanking::new("B", 50.0, false),
        ];
        let summary = VisibilitySummary::compute(&rankings).unwrap();

        let names: Vec<&str> = summary.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "Brand", "B"]);
        assert_eq!(summary.brand_rank, 2);
        // Tied with the top competitor
        assert_eq!(summary.standing, Standing::Equal);
    }

    #[test]
    fn test_no_own_entry_is_none() {
        let rankings = vec![CompetitorRanking::new("X", 55.0, false)];
        assert!(VisibilitySummary::compute(&rankings).is_none());
        assert!(VisibilitySummary::compute(&[]).is_none());
    }

    #[test]
    fn test_top_entries_caps_at_len() {
        let summary = VisibilitySummary::compute(&three_entry_run()).unwrap();
        assert_eq!(summary.top_entries(8).len(), 3);
        assert_eq!(summary.top_entries(2).len(), 2);
        assert_eq!(summary.top_entries(2)[0].name, "X");
    }

    // =========================================================================
    // Tests for enrichment
    // =========================================================================

    #[test]
    fn test_enrichment_derives_favicon_and_logo() {
        let summary = VisibilitySummary::compute(&three_entry_run()).unwrap();
        let identified = vec![IdentifiedCompetitor::new("X").with_url("x-corp.com")];
        let company = Company::new("Brand", "https://brand.example/about");

        let enriched = enrich_entries(&summary, &identified, Some(&company));

        let x = &enriched[0];
        assert_eq!(x.rank, 1);
        assert_eq!(x.domain.as_deref(), Some("x-corp.com"));
        assert_eq!(
            x.favicon.as_deref(),
            Some("https://www.google.com/s2/favicons?domain=x-corp.com&sz=64")
        );
        assert_eq!(
            x.logo.as_deref(),
            Some("https://x-corp.com/apple-touch-icon.png")
        );

        let brand = &enriched[1];
        assert!(brand.is_own);
        assert_eq!(brand.rank, 2);
        assert_eq!(brand.domain.as_deref(), Some("brand.example"));

        // Y has no detection record: enrichment is absent, not an error
        let y = &enriched[2];
        assert!(y.domain.is_none());
        assert!(y.favicon.is_none());
        assert!(y.logo.is_none());
    }

    #[test]
    fn test_enrichment_prefers_explicit_assets() {
        let summary = VisibilitySummary::compute(&three_entry_run()).unwrap();

        let mut detected = IdentifiedCompetitor::new("x").with_url("x-corp.com");
        detected.metadata = Some(CompetitorMetadata {
            favicon: Some("https://x-corp.com/fav.ico".to_string()),
        });

        let mut company = Company::new("Brand", "brand.example");
        company.favicon = Some("https://brand.example/fav.ico".to_string());
        company.logo = Some("https://brand.example/logo.png".to_string());

        let enriched = enrich_entries(&summary, &[detected], Some(&company));

        // Case-insensitive join on the competitor name
        assert_eq!(
            enriched[0].favicon.as_deref(),
            Some("https://x-corp.com/fav.ico")
        );
        assert_eq!(
            enriched[1].favicon.as_deref(),
            Some("https://brand.example/fav.ico")
        );
        assert_eq!(
            enriched[1].logo.as_deref(),
            Some("https://brand.example/logo.png")
        );
    }

    #[test]
    fn test_enrichment_without_company() {
        let summary = VisibilitySummary::compute(&three_entry_run()).unwrap();
        let enriched = enrich_entries(&summary, &[], None);

        assert_eq!(enriched.len(), 3);
        let brand = enriched.iter().find(|e| e.is_own).unwrap();
        assert!(brand.domain.is_none());
        assert!(brand.favicon.is_none());
    }

    #[test]
    fn test_own_entry_gets_brand_color() {
        let rankings = vec![
            CompetitorRanking::new("X", 55.0, false),
            CompetitorRanking::new("Brand", 40.0, true),
        ];
        let summary = VisibilitySummary::compute(&rankings).unwrap();
        let enriched = enrich_entries(&summary, &[], None);

        // The brand keeps its reserved color at any sorted position; the
        // palette is for competitors only
        let own = enriched.iter().find(|e| e.is_own).unwrap();
        assert_eq!(own.color, BRAND_COLOR);
        assert_ne!(own.color, chart_color(1));
        assert_eq!(enriched[0].color, chart_color(0));
    }

    #[test]
    fn test_duplicate_own_entries_rank_and_gap_agree() {
        // Invariant violation: two own entries. The first in input order is
        // the brand for both the rank and the gap.
        let rankings = vec![
            CompetitorRanking::new("Brand", 40.0, true),
            CompetitorRanking::new("X", 55.0, false),
            CompetitorRanking::new("Stale Brand", 60.0, true),
        ];
        let summary = VisibilitySummary::compute(&rankings).unwrap();

        assert_eq!(summary.brand_rank, 3);
        assert_eq!(summary.score_gap, -15.0);
        assert_eq!(summary.standing, Standing::Behind);
    }

    #[test]
    fn test_color_assignment_cycles() {
        assert_eq!(chart_color(0), "#3B82F6");
        assert_eq!(chart_color(7), "#F43F5E");
        assert_eq!(chart_color(8), chart_color(0));
        assert_eq!(chart_color(13), chart_color(5));
    }
}
