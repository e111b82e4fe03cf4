//! Same-day duplicate collapse.
//!
//! Exchanges publish the same filing several times a day (one Appendix 3Y
//! per director, re-released PDFs with a ticker suffix). Those rows carry
//! no extra signal, so similar same-day headlines collapse to one
//! representative before classification.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use super::types::{DeduplicationGroup, DeduplicationStats, RawAnnouncement};

/// Matches "APPENDIX 3X", "APPENDIX 3Y", etc.
static APPENDIX_BASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"APPENDIX\s+\d+[A-Z]").expect("appendix pattern"));

/// Consolidate same-day announcements with similar headlines.
///
/// Within each calendar date a single forward pass clusters headlines that
/// are byte-equal, equal after ticker-suffix normalization, or share an
/// appendix base. The first input-order member of each cluster survives.
/// Output is sorted most recent first; dateless announcements are never
/// grouped and are appended last in input order.
///
/// Running this on its own output is a no-op.
pub fn deduplicate_announcements(
    announcements: Vec<RawAnnouncement>,
) -> (Vec<RawAnnouncement>, DeduplicationStats) {
    let mut stats = DeduplicationStats {
        total_before: announcements.len(),
        ..DeduplicationStats::default()
    };

    if announcements.is_empty() {
        return (announcements, stats);
    }

    // Group by calendar date; BTreeMap keeps date iteration deterministic.
    let mut by_date: BTreeMap<NaiveDate, Vec<RawAnnouncement>> = BTreeMap::new();
    let mut dateless = Vec::new();
    for ann in announcements {
        match ann.date {
            Some(dt) => by_date.entry(dt.date_naive()).or_default().push(ann),
            None => dateless.push(ann),
        }
    }

    let mut result = Vec::new();

    for (date, day_announcements) in by_date {
        let mut used = vec![false; day_announcements.len()];

        for i in 0..day_announcements.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            let mut group_headlines = vec![day_announcements[i].headline.clone()];

            for j in (i + 1)..day_announcements.len() {
                if used[j] {
                    continue;
                }
                if are_similar_headlines(
                    &day_announcements[i].headline,
                    &day_announcements[j].headline,
                ) {
                    used[j] = true;
                    group_headlines.push(day_announcements[j].headline.clone());
                }
            }

            if group_headlines.len() > 1 {
                debug!(
                    %date,
                    count = group_headlines.len(),
                    representative = %day_announcements[i].headline,
                    "collapsed duplicate announcements"
                );
                stats.groups.push(DeduplicationGroup {
                    date,
                    count: group_headlines.len(),
                    headlines: group_headlines,
                });
            }

            result.push(day_announcements[i].clone());
        }
    }

    // Most recent first; the sort is stable so same-timestamp rows keep
    // input order.
    result.sort_by(|a, b| b.date.cmp(&a.date));
    result.extend(dateless);

    stats.total_after = result.len();
    stats.duplicates_found = stats.total_before - stats.total_after;

    (result, stats)
}

/// Whether two headlines should be considered duplicates.
fn are_similar_headlines(h1: &str, h2: &str) -> bool {
    if h1 == h2 {
        return true;
    }

    if normalize_headline(h1) == normalize_headline(h2) {
        return true;
    }

    match (appendix_base(h1), appendix_base(h2)) {
        (Some(b1), Some(b2)) => b1 == b2,
        _ => false,
    }
}

/// Strip a trailing " - CODE" ticker suffix (2-4 uppercase letters) and
/// uppercase for comparison.
fn normalize_headline(headline: &str) -> String {
    let mut h = headline.trim();
    if let Some(idx) = h.rfind(" - ") {
        if idx > 0 {
            let suffix = h[idx + 3..].trim();
            if (2..=4).contains(&suffix.len()) && suffix.chars().all(|c| c.is_ascii_uppercase()) {
                h = h[..idx].trim_end();
            }
        }
    }
    h.to_uppercase()
}

/// The appendix base type ("APPENDIX 3Y"), if present.
fn appendix_base(headline: &str) -> Option<String> {
    let upper = headline.to_uppercase();
    APPENDIX_BASE.find(&upper).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ann(date: Option<&str>, headline: &str) -> RawAnnouncement {
        RawAnnouncement {
            date: date.map(|d| {
                Utc.with_ymd_and_hms(
                    d[0..4].parse().unwrap(),
                    d[5..7].parse().unwrap(),
                    d[8..10].parse().unwrap(),
                    10,
                    0,
                    0,
                )
                .unwrap()
            }),
            headline: headline.to_string(),
            ann_type: String::new(),
            pdf_url: String::new(),
            document_key: String::new(),
            price_sensitive: false,
        }
    }

    #[test]
    fn collapses_same_day_appendix_variants() {
        let input = vec![
            ann(Some("2026-01-08"), "Appendix 3Y - Director A"),
            ann(Some("2026-01-08"), "Appendix 3Y - Director B"),
            ann(Some("2026-01-08"), "Appendix 3Y - Director C"),
            ann(Some("2026-01-08"), "Quarterly Report"),
            ann(Some("2026-01-07"), "Appendix 3Y - Director D"),
            ann(Some("2026-01-07"), "Trading Update"),
        ];

        let (result, stats) = deduplicate_announcements(input);

        assert_eq!(stats.total_before, 6);
        assert_eq!(stats.total_after, 4);
        assert_eq!(stats.duplicates_found, 2);
        assert_eq!(result.len(), 4);

        // One recorded group: the three 3Y filings on Jan 8
        assert_eq!(stats.groups.len(), 1);
        assert_eq!(stats.groups[0].count, 3);
        assert_eq!(stats.groups[0].headlines[0], "Appendix 3Y - Director A");
    }

    #[test]
    fn keeps_first_input_order_representative() {
        let input = vec![
            ann(Some("2026-01-08"), "Appendix 3Y - Director B"),
            ann(Some("2026-01-08"), "Appendix 3Y - Director A"),
        ];
        let (result, _) = deduplicate_announcements(input);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].headline, "Appendix 3Y - Director B");
    }

    #[test]
    fn ticker_suffix_variants_are_duplicates() {
        let input = vec![
            ann(Some("2026-01-08"), "Proposed issue of securities - EXR"),
            ann(Some("2026-01-08"), "Proposed issue of securities"),
        ];
        let (result, stats) = deduplicate_announcements(input);
        assert_eq!(result.len(), 1);
        assert_eq!(stats.duplicates_found, 1);
    }

    #[test]
    fn long_suffix_is_not_a_ticker_code() {
        let input = vec![
            ann(Some("2026-01-08"), "Update - ABCDE"),
            ann(Some("2026-01-08"), "Update"),
        ];
        let (result, _) = deduplicate_announcements(input);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn different_days_never_group() {
        let input = vec![
            ann(Some("2026-01-08"), "Appendix 3Y - Director A"),
            ann(Some("2026-01-09"), "Appendix 3Y - Director A"),
        ];
        let (result, stats) = deduplicate_announcements(input);
        assert_eq!(result.len(), 2);
        assert_eq!(stats.duplicates_found, 0);
    }

    #[test]
    fn sorted_most_recent_first_with_dateless_last() {
        let input = vec![
            ann(Some("2026-01-07"), "Older"),
            ann(None, "Undated"),
            ann(Some("2026-01-09"), "Newer"),
        ];
        let (result, _) = deduplicate_announcements(input);
        assert_eq!(result[0].headline, "Newer");
        assert_eq!(result[1].headline, "Older");
        assert_eq!(result[2].headline, "Undated");
    }

    #[test]
    fn idempotent_on_own_output() {
        let input = vec![
            ann(Some("2026-01-08"), "Appendix 3Y - Director A"),
            ann(Some("2026-01-08"), "Appendix 3Y - Director B"),
            ann(Some("2026-01-08"), "Quarterly Report"),
            ann(Some("2026-01-07"), "Trading Update"),
        ];
        let (first, _) = deduplicate_announcements(input);
        let (second, stats) = deduplicate_announcements(first.clone());
        assert_eq!(stats.total_before, stats.total_after);
        assert_eq!(stats.duplicates_found, 0);
        assert_eq!(first.len(), second.len());
    }
}
