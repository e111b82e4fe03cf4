//! Price progression score (PPS), 0.0-1.0.
//!
//! Do price-sensitive announcements that move the stock hold their move a
//! week later, or bleed back? For each price-sensitive announcement with
//! an initial move beyond the qualifying threshold, retention compares the
//! close five trading days later against the pre-announcement close.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::config::RatingConfig;
use super::types::{Announcement, PpsComponents, PpsResult};
use crate::prices::{PriceSeries, ScanDirection};

const NEUTRAL_SCORE: f64 = 0.5;

// Same windows the impact calculator uses for its on-date/before lookups.
const ON_DATE_LOOKAHEAD_DAYS: u64 = 5;
const BEFORE_LOOKBACK_DAYS: u64 = 10;
const RETENTION_LOOKAHEAD_DAYS: u64 = 15;

/// Calculate the price progression score across qualifying announcements.
pub fn calculate_pps(
    announcements: &[Announcement],
    prices: &PriceSeries,
    config: &RatingConfig,
) -> PpsResult {
    if announcements.is_empty() || prices.is_empty() {
        return neutral("No announcements or price data - neutral score applied");
    }

    let mut retentions = Vec::new();

    for ann in announcements {
        if !ann.is_price_sensitive {
            continue;
        }
        let Some(date) = ann.date else {
            continue;
        };
        let date = date.date_naive();

        let Some(before) =
            prices.nearest_trading_day(date, ScanDirection::Backward, BEFORE_LOOKBACK_DAYS)
        else {
            continue;
        };
        let Some(on_date) =
            prices.nearest_trading_day(date, ScanDirection::Forward, ON_DATE_LOOKAHEAD_DAYS)
        else {
            continue;
        };
        if before.close <= Decimal::ZERO {
            continue;
        }

        let initial_move_pct = ((on_date.close - before.close) / before.close
            * Decimal::from(100))
        .to_f64()
        .unwrap_or(0.0);
        if initial_move_pct.abs() <= config.pps_qualifying_move_pct {
            continue;
        }

        let Some(later) = prices.nth_trading_day_after(
            on_date.date,
            config.pps_retention_days,
            RETENTION_LOOKAHEAD_DAYS,
        ) else {
            continue;
        };

        // How much of the initial move still stands a week later. Signed
        // so that a retained fall scores like a retained rise; clamped so
        // overshoot and full reversal stay in range.
        let initial_move = on_date.close - before.close;
        let retained = later.close - before.close;
        let retention = (retained / initial_move).to_f64().unwrap_or(0.0);
        retentions.push(retention.clamp(0.0, 1.0));
    }

    if retentions.is_empty() {
        return neutral("No qualifying price-sensitive moves - neutral score applied");
    }

    let qualifying_events = retentions.len();
    let average_retention = retentions.iter().sum::<f64>() / qualifying_events as f64;

    PpsResult {
        score: average_retention,
        components: PpsComponents {
            qualifying_events,
            average_retention,
        },
        reasoning: format!(
            "{qualifying_events} qualifying announcement moves retained {:.0}% of their initial reaction after {} trading days",
            average_retention * 100.0,
            config.pps_retention_days
        ),
    }
}

fn neutral(reasoning: &str) -> PpsResult {
    PpsResult {
        score: NEUTRAL_SCORE,
        components: PpsComponents::default(),
        reasoning: reasoning.to_string(),
    }
}
