//! Outlook credibility (OB), 0.0 / 0.5 / 1.0.
//!
//! Forward-looking statements are only worth scoring when something
//! concrete backs them. The calculator looks for outlook-style headlines
//! and checks whether any of them names a catalyst, a timeframe, or both.

use super::config::ObConfig;
use super::types::{Announcement, ObResult};

/// Calculate outlook credibility from a company's announcements.
pub fn calculate_ob(announcements: &[Announcement], config: &ObConfig) -> ObResult {
    let outlook_headlines: Vec<String> = announcements
        .iter()
        .map(|a| a.headline.to_uppercase())
        .filter(|h| config.outlook_keywords.iter().any(|kw| h.contains(kw)))
        .collect();

    if outlook_headlines.is_empty() {
        return ObResult {
            score: 0.0,
            catalyst_found: false,
            timeframe_found: false,
            reasoning: "No forward-looking statements found - nothing to credit".to_string(),
        };
    }

    let catalyst_found = outlook_headlines
        .iter()
        .any(|h| config.catalyst_keywords.iter().any(|kw| h.contains(kw)));
    let timeframe_found = outlook_headlines
        .iter()
        .any(|h| config.timeframe_keywords.iter().any(|kw| h.contains(kw)));

    let (score, verdict) = match (catalyst_found, timeframe_found) {
        (true, true) => (1.0, "backed by a named catalyst and a timeframe"),
        (true, false) => (0.5, "backed by a named catalyst but no timeframe"),
        (false, true) => (0.5, "backed by a timeframe but no named catalyst"),
        (false, false) => (0.0, "backed by neither a catalyst nor a timeframe"),
    };

    ObResult {
        score,
        catalyst_found,
        timeframe_found,
        reasoning: format!(
            "{} forward-looking statement(s) {verdict}",
            outlook_headlines.len()
        ),
    }
}
