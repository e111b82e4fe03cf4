//! End-to-end tests for the announcement and rating engines.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use market_signals::normalize::{normalize_announcements, AnnouncementRecord};
use market_signals::rating::{
    rate_company, Announcement, AnnouncementType, Fundamentals, RatingConfig, RatingLabel,
};
use market_signals::{
    process_announcements, PriceBar, RawAnnouncement, RelevanceCategory, SignalNoiseRating,
};

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
        pdf_url: format!("https://example.com/{headline}.pdf"),
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

fn january_prices() -> Vec<PriceBar> {
    vec![
        bar("2026-01-03", "1.00", 100_000),
        bar("2026-01-06", "1.02", 110_000),
        bar("2026-01-07", "1.05", 120_000),
        bar("2026-01-08", "1.10", 200_000),
        bar("2026-01-09", "1.12", 150_000),
    ]
}

#[test]
fn full_pipeline_with_duplicates_and_prices() {
    let raw = vec![
        ann("2026-01-08", "Appendix 3Y - Director A", "Company Administration", false),
        ann("2026-01-08", "Appendix 3Y - Director B", "Company Administration", false),
        ann("2026-01-08", "Appendix 3Y - Director C", "Company Administration", false),
        ann("2026-01-08", "Quarterly Activities Report", "Periodic Reports", true),
        ann("2026-01-07", "Appendix 3Y - Director D", "Company Administration", false),
        ann("2026-01-07", "Trading Update", "Progress Report", false),
    ];

    let (processed, summary, dedup) = process_announcements(raw, &january_prices());

    // Dedup: 6 in, 4 out, 2 duplicates collapsed
    assert_eq!(dedup.total_before, 6);
    assert_eq!(dedup.total_after, 4);
    assert_eq!(dedup.duplicates_found, 2);
    assert_eq!(dedup.total_after, dedup.total_before - dedup.duplicates_found);

    // Count conservation
    assert_eq!(summary.total_count, processed.len());
    assert_eq!(
        summary.high_relevance_count
            + summary.medium_relevance_count
            + summary.low_relevance_count
            + summary.noise_count,
        summary.total_count
    );

    // Most recent first
    assert!(processed.windows(2).all(|w| w[0].date >= w[1].date));

    let quarterly = processed
        .iter()
        .find(|p| p.headline == "Quarterly Activities Report")
        .unwrap();
    assert_eq!(quarterly.relevance_category, RelevanceCategory::High);

    // Jan 8 announcement against the fixture series: before 1.05, after 1.10
    let impact = quarterly.price_impact.as_ref().unwrap();
    assert_eq!(impact.price_before, Decimal::from_str("1.05").unwrap());
    assert_eq!(impact.price_after, Decimal::from_str("1.10").unwrap());
    assert!((impact.change_percent - 4.76).abs() < 0.01);

    // Appendix filings rate as routine regardless of price action
    let appendix = processed
        .iter()
        .find(|p| p.headline.starts_with("Appendix 3Y"))
        .unwrap();
    assert_eq!(appendix.signal_noise_rating, SignalNoiseRating::Routine);
    assert!(appendix.is_routine);
}

#[test]
fn pipeline_is_deterministic() {
    let raw = vec![
        ann("2026-01-08", "Quarterly Activities Report", "Periodic Reports", true),
        ann("2026-01-08", "Trading Halt", "Market Notice", false),
        ann("2026-01-07", "Exploration Results", "Progress Report", false),
    ];

    let run = |input: Vec<RawAnnouncement>| {
        let (p, s, d) = process_announcements(input, &january_prices());
        serde_json::to_string(&(p, s, d)).unwrap()
    };

    assert_eq!(run(raw.clone()), run(raw));
}

#[test]
fn processed_announcement_json_shape() {
    let raw = vec![ann(
        "2026-01-08",
        "Quarterly Activities Report",
        "Periodic Reports",
        true,
    )];
    let (processed, summary, _) = process_announcements(raw, &january_prices());

    let value = serde_json::to_value(&processed[0]).unwrap();
    assert_eq!(value["type"], "Periodic Reports");
    assert_eq!(value["price_sensitive"], true);
    assert_eq!(value["relevance_category"], "HIGH");
    assert!(value["signal_noise_rating"].is_string());
    assert!(value["price_impact"]["change_percent"].is_number());
    assert_eq!(value["is_routine"], false);

    let summary_value = serde_json::to_value(&summary).unwrap();
    assert!(summary_value["mqs_scores"]["signal_to_noise_ratio"].is_number());
}

#[test]
fn normalization_feeds_the_pipeline() {
    let records = vec![
        AnnouncementRecord {
            date: "2026-01-08T10:00:00Z".to_string(),
            headline: "Quarterly Activities Report".to_string(),
            ann_type: "Periodic Reports".to_string(),
            pdf_url: String::new(),
            document_key: String::new(),
            price_sensitive: true,
        },
        AnnouncementRecord {
            date: "garbage".to_string(),
            headline: "Broken Row".to_string(),
            ann_type: String::new(),
            pdf_url: String::new(),
            document_key: String::new(),
            price_sensitive: false,
        },
    ];

    let raw = normalize_announcements(&records);
    assert_eq!(raw.len(), 1);

    let (processed, summary, _) = process_announcements(raw, &january_prices());
    assert_eq!(processed.len(), 1);
    assert_eq!(summary.total_count, 1);
}

fn typed(date: &str, headline: &str, ann_type: AnnouncementType, sensitive: bool) -> Announcement {
    Announcement {
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
        ann_type,
        is_price_sensitive: sensitive,
    }
}

#[test]
fn rating_gate_consistency() {
    let strong = Fundamentals {
        revenue_ttm: Decimal::from(50_000_000),
        cash_balance: Decimal::from(20_000_000),
        quarterly_cash_burn: Decimal::from(1_000_000),
        shares_outstanding_current: 110_000_000,
        shares_outstanding_3y_ago: Some(100_000_000),
        is_profitable: true,
        has_producing_asset: true,
    };
    let shell = Fundamentals {
        revenue_ttm: Decimal::ZERO,
        cash_balance: Decimal::from(500_000),
        quarterly_cash_burn: Decimal::from(2_000_000),
        shares_outstanding_current: 300_000_000,
        shares_outstanding_3y_ago: Some(100_000_000),
        is_profitable: false,
        has_producing_asset: false,
    };

    let announcements = vec![
        typed("2026-01-08", "Quarterly Activities Report", AnnouncementType::Quarterly, true),
        typed("2025-10-08", "Annual Report", AnnouncementType::AnnualReport, false),
        typed("2025-07-08", "Supply Agreement Signed", AnnouncementType::Contract, true),
    ];
    let prices = january_prices();
    let config = RatingConfig::default();

    let good = rate_company(&strong, &announcements, &prices, &config);
    assert!(good.gate_passed);
    let investability = good.investability.unwrap();
    assert!((0.0..=100.0).contains(&investability));
    assert!(!good.reasoning.is_empty());

    let bad = rate_company(&shell, &announcements, &prices, &config);
    assert!(!bad.gate_passed);
    assert_eq!(bad.investability, None);
    assert_eq!(bad.label, RatingLabel::Speculative);
}

#[test]
fn rating_result_json_shape() {
    let fundamentals = Fundamentals {
        revenue_ttm: Decimal::from(50_000_000),
        cash_balance: Decimal::from(20_000_000),
        quarterly_cash_burn: Decimal::from(1_000_000),
        shares_outstanding_current: 110_000_000,
        shares_outstanding_3y_ago: Some(100_000_000),
        is_profitable: true,
        has_producing_asset: true,
    };
    let result = rate_company(&fundamentals, &[], &[], &RatingConfig::default());

    let value = serde_json::to_value(&result).unwrap();
    assert!(value["label"].is_string());
    assert_eq!(value["gate_passed"], true);
    assert!(value["investability"].is_number());
    assert!(value["scores"]["bfs"]["score"].is_number());
    assert!(value["scores"]["ob"]["catalyst_found"].is_boolean());
    assert!(value["reasoning"].is_string());
}

#[test]
fn neutral_defaults_keep_sparse_companies_scoreable() {
    // Gate-clearing fundamentals but no announcements and no prices:
    // NFR/PPS/VRS fall back to 0.5, OB to 0.0.
    let fundamentals = Fundamentals {
        revenue_ttm: Decimal::from(50_000_000),
        cash_balance: Decimal::from(20_000_000),
        quarterly_cash_burn: Decimal::from(1_000_000),
        shares_outstanding_current: 100_000_000,
        shares_outstanding_3y_ago: Some(100_000_000),
        is_profitable: true,
        has_producing_asset: true,
    };
    let result = rate_company(&fundamentals, &[], &[], &RatingConfig::default());

    assert!(result.gate_passed);
    // (2/2)*12.5 + (2/2)*12.5 + 0.5*25 + 0.5*25 + 0.5*15 + 0.0*10 = 57.5
    let investability = result.investability.unwrap();
    assert!((investability - 57.5).abs() < 1e-9);
    assert_eq!(result.label, RatingLabel::Watchlist);
}
