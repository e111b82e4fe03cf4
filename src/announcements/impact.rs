//! Price and volume reaction windows around an announcement date.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::types::{ImpactSignal, PriceImpactData};
use crate::prices::{PriceSeries, ScanDirection};

// Reaction thresholds, shared with the signal-noise classifier.
pub(crate) const SIGNIFICANT_CHANGE_PCT: f64 = 3.0;
pub(crate) const SIGNIFICANT_VOLUME_RATIO: f64 = 2.0;
pub(crate) const MODERATE_CHANGE_PCT: f64 = 1.5;
pub(crate) const MODERATE_VOLUME_RATIO: f64 = 1.5;
pub(crate) const LOW_CHANGE_PCT: f64 = 0.5;
pub(crate) const LOW_VOLUME_RATIO: f64 = 1.2;
pub(crate) const SIGNIFICANT_PRE_DRIFT_PCT: f64 = 2.0;

// Lookup windows, in calendar days.
const ON_DATE_LOOKAHEAD_DAYS: u64 = 5;
const BEFORE_LOOKBACK_DAYS: u64 = 10;
const VOLUME_WINDOW_DAYS: u64 = 15;
const VOLUME_SAMPLE_DAYS: usize = 5;
const PRE_DRIFT_TRADING_DAYS: usize = 5;

/// Stock price movement around an announcement date.
///
/// Returns `None` when the series has no bar on (or within 5 calendar days
/// after) the announcement date, or no bar within the 10 calendar days
/// before it. Partial results are never produced.
pub fn calculate_price_impact(
    announcement_date: NaiveDate,
    prices: &PriceSeries,
) -> Option<PriceImpactData> {
    if prices.is_empty() {
        return None;
    }

    // Announcements on weekends/holidays react on the next trading day.
    let on_date =
        prices.nearest_trading_day(announcement_date, ScanDirection::Forward, ON_DATE_LOOKAHEAD_DAYS)?;
    let before =
        prices.nearest_trading_day(announcement_date, ScanDirection::Backward, BEFORE_LOOKBACK_DAYS)?;

    let volume_before = prices.average_volume(
        announcement_date,
        ScanDirection::Backward,
        VOLUME_WINDOW_DAYS,
        VOLUME_SAMPLE_DAYS,
    );
    let volume_after = prices.average_volume(
        announcement_date,
        ScanDirection::Forward,
        VOLUME_WINDOW_DAYS,
        VOLUME_SAMPLE_DAYS,
    );

    let change_percent = if before.close > Decimal::ZERO {
        ((on_date.close - before.close) / before.close * Decimal::from(100))
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    };

    let volume_change_ratio = if volume_before > 0 {
        volume_after as f64 / volume_before as f64
    } else {
        1.0
    };

    let abs_change = change_percent.abs();
    let impact_signal = if abs_change >= SIGNIFICANT_CHANGE_PCT
        || volume_change_ratio >= SIGNIFICANT_VOLUME_RATIO
    {
        ImpactSignal::Significant
    } else if abs_change >= MODERATE_CHANGE_PCT || volume_change_ratio >= MODERATE_VOLUME_RATIO {
        ImpactSignal::Moderate
    } else {
        ImpactSignal::Minimal
    };

    let mut impact = PriceImpactData {
        price_before: before.close,
        price_after: on_date.close,
        change_percent,
        volume_before,
        volume_after,
        volume_change_ratio,
        impact_signal,
        pre_announcement_drift: None,
        pre_announcement_price_t5: None,
        pre_announcement_price_t1: None,
        has_significant_pre_drift: false,
        pre_drift_interpretation: None,
    };

    // Pre-announcement drift, T-5 to T-1 (T-1 is the before bar).
    let t5 = prices.nth_trading_day_before(
        announcement_date,
        PRE_DRIFT_TRADING_DAYS,
        VOLUME_WINDOW_DAYS,
    );
    if let Some(t5) = t5 {
        if t5.close > Decimal::ZERO {
            let drift = ((before.close - t5.close) / t5.close * Decimal::from(100))
                .to_f64()
                .unwrap_or(0.0);
            impact.pre_announcement_drift = Some(drift);
            impact.pre_announcement_price_t5 = Some(t5.close);
            impact.pre_announcement_price_t1 = Some(before.close);

            if drift.abs() >= SIGNIFICANT_PRE_DRIFT_PCT {
                impact.has_significant_pre_drift = true;
                impact.pre_drift_interpretation = Some(if drift > 0.0 {
                    format!(
                        "Price drifted +{drift:.1}% in week before announcement - possible information leakage or anticipation"
                    )
                } else {
                    format!(
                        "Price drifted {drift:.1}% in week before announcement - potential early positioning or concern"
                    )
                });
            }
        }
    }

    Some(impact)
}
