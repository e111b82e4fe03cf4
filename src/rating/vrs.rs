//! Volatility regime stability (VRS), 0.0-1.0.
//!
//! Partitions the price history into consecutive fixed-length regimes and
//! asks how many of them trade with a volatility close to the stock's
//! median regime volatility. A register that whipsaws between sleepy and
//! violent regimes is hard to underwrite regardless of direction.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::config::VrsConfig;
use super::types::{VolatilityPattern, VrsComponents, VrsResult};
use crate::models::PriceBar;

const NEUTRAL_SCORE: f64 = 0.5;

/// Calculate volatility regime stability over a bar history.
pub fn calculate_vrs(bars: &[PriceBar], config: &VrsConfig) -> VrsResult {
    // Ordered positive closes, one per date.
    let mut closes: Vec<(NaiveDate, f64)> = bars
        .iter()
        .filter(|b| b.close > Decimal::ZERO)
        .filter_map(|b| b.close.to_f64().map(|c| (b.date, c)))
        .collect();
    closes.sort_by_key(|(date, _)| *date);
    closes.dedup_by_key(|(date, _)| *date);

    let returns: Vec<f64> = closes
        .windows(2)
        .map(|w| (w[1].1 - w[0].1) / w[0].1)
        .collect();

    let regime_vols: Vec<f64> = returns
        .chunks_exact(config.window_days)
        .map(std_dev)
        .collect();
    let regime_count = regime_vols.len();

    if regime_count < config.min_regimes {
        return VrsResult {
            score: NEUTRAL_SCORE,
            components: VrsComponents {
                regime_count,
                stable_regimes_pct: 0.0,
                volatility_pattern: VolatilityPattern::Undefined,
            },
            reasoning: format!(
                "Only {regime_count} complete volatility regimes (need {}) - neutral score applied",
                config.min_regimes
            ),
        };
    }

    let median = median_volatility(&regime_vols);
    let stable = regime_vols
        .iter()
        .filter(|&&vol| {
            vol >= median * config.stability_band_low && vol <= median * config.stability_band_high
        })
        .count();
    let stable_pct = stable as f64 / regime_count as f64;

    let pattern = if stable_pct >= config.stable_pattern_floor {
        VolatilityPattern::Stable
    } else if stable_pct >= config.shifting_pattern_floor {
        VolatilityPattern::Shifting
    } else {
        VolatilityPattern::Erratic
    };

    VrsResult {
        score: stable_pct,
        components: VrsComponents {
            regime_count,
            stable_regimes_pct: stable_pct,
            volatility_pattern: pattern,
        },
        reasoning: format!(
            "{stable} of {regime_count} volatility regimes within the stability band - {} pattern",
            pattern.as_str()
        ),
    }
}

/// Population standard deviation.
fn std_dev(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;
    variance.sqrt()
}

fn median_volatility(vols: &[f64]) -> f64 {
    let mut sorted = vols.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("volatilities are finite"));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
