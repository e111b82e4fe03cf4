//! Narrative-to-fact ratio (NFR), 0.0-1.0.
//!
//! What share of a company's announcements report verifiable outcomes
//! (quarterlies, annual reports, contracts, acquisitions) rather than
//! story (drilling updates, halts, everything else)?

use super::types::{Announcement, NfrComponents, NfrResult};

/// Neutral score applied when there is nothing to assess
const NEUTRAL_SCORE: f64 = 0.5;

/// Calculate the narrative-to-fact ratio across a company's announcements.
pub fn calculate_nfr(announcements: &[Announcement]) -> NfrResult {
    let total = announcements.len();
    if total == 0 {
        return NfrResult {
            score: NEUTRAL_SCORE,
            components: NfrComponents::default(),
            reasoning: "No announcements to assess - neutral score applied".to_string(),
        };
    }

    let fact = announcements
        .iter()
        .filter(|a| a.ann_type.is_fact_based())
        .count();
    let narrative = total - fact;
    let fact_ratio = fact as f64 / total as f64;

    NfrResult {
        score: fact_ratio,
        components: NfrComponents {
            total_announcements: total,
            fact_announcements: fact,
            narrative_announcements: narrative,
            fact_ratio,
        },
        reasoning: format!(
            "{fact} of {total} announcements are fact-based ({:.0}% facts, {:.0}% narrative)",
            fact_ratio * 100.0,
            (1.0 - fact_ratio) * 100.0
        ),
    }
}
