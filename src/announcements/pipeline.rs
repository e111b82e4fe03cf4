//! Announcement processing pipeline.
//!
//! Dedup, classify, measure, rate - in that order - then aggregate the
//! run into a summary. Absent price data degrades to absent impact fields;
//! the pipeline itself never fails.

use tracing::{debug, info};

use super::dedup::deduplicate_announcements;
use super::impact::calculate_price_impact;
use super::matchers::{
    classify_relevance, detect_trading_halt, is_dividend_announcement, is_routine_announcement,
};
use super::signal_noise::calculate_signal_noise;
use super::types::{
    DeduplicationStats, MqsScores, ProcessedAnnouncement, ProcessingSummary, RawAnnouncement,
    RelevanceCategory, SignalNoiseRating,
};
use crate::models::PriceBar;
use crate::prices::PriceSeries;

/// Apply all classification and analysis to raw announcements.
///
/// Returns the processed list (deduplicated, most recent first), the
/// aggregate summary, and the dedup stats.
pub fn process_announcements(
    raw: Vec<RawAnnouncement>,
    prices: &[PriceBar],
) -> (
    Vec<ProcessedAnnouncement>,
    ProcessingSummary,
    DeduplicationStats,
) {
    let (deduped, dedup_stats) = deduplicate_announcements(raw);

    let series = if prices.is_empty() {
        None
    } else {
        Some(PriceSeries::new(prices))
    };

    let mut processed = Vec::with_capacity(deduped.len());
    let mut summary = ProcessingSummary::default();

    for ann in deduped {
        let (category, reason) =
            classify_relevance(&ann.headline, &ann.ann_type, ann.price_sensitive);

        let (is_trading_halt, is_reinstatement) = detect_trading_halt(&ann.headline);
        let is_dividend = is_dividend_announcement(&ann.headline, &ann.ann_type);
        let routine_type = is_routine_announcement(&ann.headline);

        let price_impact = match (&series, ann.date) {
            (Some(series), Some(date)) => calculate_price_impact(date.date_naive(), series),
            _ => None,
        };

        let signal = calculate_signal_noise(
            &ann,
            price_impact.as_ref(),
            is_trading_halt,
            is_reinstatement,
        );

        debug!(
            headline = %ann.headline,
            relevance = category.as_str(),
            rating = signal.rating.as_str(),
            anomaly = signal.is_anomaly,
            "classified announcement"
        );

        summary.total_count += 1;
        match category {
            RelevanceCategory::High => summary.high_relevance_count += 1,
            RelevanceCategory::Medium => summary.medium_relevance_count += 1,
            RelevanceCategory::Low => summary.low_relevance_count += 1,
            RelevanceCategory::Noise => summary.noise_count += 1,
        }
        match signal.rating {
            SignalNoiseRating::HighSignal => summary.high_signal_count += 1,
            SignalNoiseRating::ModerateSignal => summary.moderate_signal_count += 1,
            SignalNoiseRating::LowSignal => summary.low_signal_count += 1,
            SignalNoiseRating::Routine => summary.routine_count += 1,
            SignalNoiseRating::Noise | SignalNoiseRating::None => {}
        }
        if signal.is_anomaly {
            summary.anomaly_count += 1;
        }

        processed.push(ProcessedAnnouncement {
            date: ann.date,
            headline: ann.headline,
            ann_type: ann.ann_type,
            pdf_url: ann.pdf_url,
            document_key: ann.document_key,
            price_sensitive: ann.price_sensitive,
            relevance_category: category,
            relevance_reason: reason,
            signal_noise_rating: signal.rating,
            signal_noise_rationale: signal.rationale,
            price_impact,
            is_trading_halt,
            is_reinstatement,
            is_dividend_announcement: is_dividend,
            is_routine: routine_type.is_some(),
            routine_type: routine_type.map(str::to_string),
            is_anomaly: signal.is_anomaly,
            anomaly_type: signal.anomaly_type,
        });
    }

    if summary.total_count > 0 {
        let signal_count = summary.high_signal_count + summary.moderate_signal_count;
        let noise_count = summary.noise_count + summary.routine_count;
        let signal_to_noise_ratio = if noise_count > 0 {
            signal_count as f64 / noise_count as f64
        } else if signal_count > 0 {
            // All signal, no noise
            1.0
        } else {
            0.0
        };
        summary.mqs_scores = Some(MqsScores {
            signal_to_noise_ratio,
            high_signal_count: summary.high_signal_count,
            routine_count: summary.routine_count,
        });
    }

    info!(
        total = summary.total_count,
        duplicates = dedup_stats.duplicates_found,
        high_signal = summary.high_signal_count,
        routine = summary.routine_count,
        anomalies = summary.anomaly_count,
        "processed announcements"
    );

    (processed, summary, dedup_stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn ann(date: &str, headline: &str, ann_type: &str, price_sensitive: bool) -> RawAnnouncement {
        RawAnnouncement {
            date: Some(
                Utc.with_ymd_and_hms(
                    date[0..4].parse().unwrap(),
                    date[5..7].parse().unwrap(),
                    date[8..10].parse().unwrap(),
                    10,
                    0,
                    0,
                )
                .unwrap(),
            ),
            headline: headline.to_string(),
            ann_type: ann_type.to_string(),
            pdf_url: String::new(),
            document_key: String::new(),
            price_sensitive,
        }
    }

    fn bar(date: &str, close: &str, volume: i64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_str(date).unwrap(),
            open: Decimal::from_str(close).unwrap(),
            high: Decimal::from_str(close).unwrap(),
            low: Decimal::from_str(close).unwrap(),
            close: Decimal::from_str(close).unwrap(),
            volume,
        }
    }

    fn fixture() -> (Vec<RawAnnouncement>, Vec<PriceBar>) {
        let raw = vec![
            ann(
                "2026-01-08",
                "Quarterly Activities Report",
                "Periodic Reports",
                true,
            ),
            ann(
                "2026-01-08",
                "Appendix 3Y - Director Interest Change",
                "Company Administration",
                false,
            ),
        ];
        let prices = vec![
            bar("2026-01-07", "1.00", 100_000),
            bar("2026-01-08", "1.05", 150_000),
        ];
        (raw, prices)
    }

    #[test]
    fn classifies_and_counts() {
        let (raw, prices) = fixture();
        let (processed, summary, dedup_stats) = process_announcements(raw, &prices);

        assert_eq!(processed.len(), 2);
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.high_relevance_count, 1);
        assert_eq!(dedup_stats.duplicates_found, 0);

        for p in &processed {
            match p.headline.as_str() {
                "Quarterly Activities Report" => {
                    assert_eq!(p.relevance_category, RelevanceCategory::High);
                    assert!(p.price_impact.is_some());
                }
                "Appendix 3Y - Director Interest Change" => {
                    assert!(p.is_routine);
                    assert_eq!(p.signal_noise_rating, SignalNoiseRating::Routine);
                }
                other => panic!("unexpected headline {other}"),
            }
        }
    }

    #[test]
    fn relevance_counts_sum_to_total() {
        let (raw, prices) = fixture();
        let (processed, summary, _) = process_announcements(raw, &prices);

        assert_eq!(summary.total_count, processed.len());
        assert_eq!(
            summary.high_relevance_count
                + summary.medium_relevance_count
                + summary.low_relevance_count
                + summary.noise_count,
            summary.total_count
        );
    }

    #[test]
    fn degrades_gracefully_without_prices() {
        let (raw, _) = fixture();
        let (processed, summary, _) = process_announcements(raw, &[]);

        assert_eq!(processed.len(), 2);
        assert!(processed.iter().all(|p| p.price_impact.is_none()));
        // Price-sensitive quarterly report still gets a characteristics-only rating
        let quarterly = processed
            .iter()
            .find(|p| p.headline == "Quarterly Activities Report")
            .unwrap();
        assert_eq!(
            quarterly.signal_noise_rating,
            SignalNoiseRating::ModerateSignal
        );
        assert!(summary.mqs_scores.is_some());
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let (raw, prices) = fixture();
        let (p1, s1, d1) = process_announcements(raw.clone(), &prices);
        let (p2, s2, d2) = process_announcements(raw, &prices);

        let json1 = serde_json::to_string(&(&p1, &s1, &d1)).unwrap();
        let json2 = serde_json::to_string(&(&p2, &s2, &d2)).unwrap();
        assert_eq!(json1, json2);
    }

    #[test]
    fn mqs_ratio_all_signal_no_noise() {
        let raw = vec![ann(
            "2026-01-08",
            "Major Acquisition Completed",
            "Company Announcement",
            true,
        )];
        let prices = vec![
            bar("2026-01-07", "1.00", 100_000),
            bar("2026-01-08", "1.10", 400_000),
        ];
        let (_, summary, _) = process_announcements(raw, &prices);

        let mqs = summary.mqs_scores.unwrap();
        assert_eq!(mqs.signal_to_noise_ratio, 1.0);
        assert_eq!(mqs.high_signal_count, 1);
    }

    #[test]
    fn empty_input_has_no_mqs() {
        let (processed, summary, dedup_stats) = process_announcements(Vec::new(), &[]);
        assert!(processed.is_empty());
        assert_eq!(summary.total_count, 0);
        assert!(summary.mqs_scores.is_none());
        assert_eq!(dedup_stats.total_before, 0);
    }
}
