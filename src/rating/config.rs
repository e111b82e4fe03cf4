//! Rating calculator thresholds.
//!
//! Single source of truth for the tunable constants. Defaults reflect the
//! production values; callers needing different bands construct their own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thresholds for the six sub-score calculators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    /// BFS: TTM revenue above this counts as a foundation indicator
    pub revenue_floor: Decimal,
    /// BFS: cash runway above this many months counts as an indicator
    pub runway_floor_months: f64,
    /// CDS: share-count CAGR above this fraction costs one point
    pub cagr_moderate: f64,
    /// CDS: share-count CAGR above this fraction zeroes the score
    pub cagr_severe: f64,
    /// CDS: trading halts per year above this costs one point
    pub max_halts_per_year: f64,
    /// CDS: capital raises per year above this costs one point
    pub max_raises_per_year: f64,
    /// CDS: announcement window length
    pub analysis_period_months: u32,
    /// PPS: minimum initial move (percent, magnitude) for an event to count
    pub pps_qualifying_move_pct: f64,
    /// PPS: retention is measured this many trading days after the move
    pub pps_retention_days: usize,
    pub vrs: VrsConfig,
    pub ob: ObConfig,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            revenue_floor: Decimal::from(10_000_000), // $10M TTM
            runway_floor_months: 18.0,
            cagr_moderate: 0.15,
            cagr_severe: 0.30,
            max_halts_per_year: 2.0,
            max_raises_per_year: 2.0,
            analysis_period_months: 36,
            pps_qualifying_move_pct: 2.0,
            pps_retention_days: 5,
            vrs: VrsConfig::default(),
            ob: ObConfig::default(),
        }
    }
}

/// Volatility regime stability thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VrsConfig {
    /// Trading days per volatility regime window
    pub window_days: usize,
    /// Below this many complete regimes the score is neutral
    pub min_regimes: usize,
    /// A regime is stable when its volatility is within this band of the
    /// median regime volatility
    pub stability_band_low: f64,
    pub stability_band_high: f64,
    /// Pattern label floors on the stable-regime share
    pub stable_pattern_floor: f64,
    pub shifting_pattern_floor: f64,
}

impl Default for VrsConfig {
    fn default() -> Self {
        Self {
            window_days: 20,
            min_regimes: 3,
            stability_band_low: 0.5,
            stability_band_high: 1.5,
            stable_pattern_floor: 0.75,
            shifting_pattern_floor: 0.4,
        }
    }
}

/// Outlook credibility keyword tables.
///
/// All matching is against uppercased headlines; keywords here are stored
/// uppercased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObConfig {
    /// Marks a headline as a forward-looking statement
    pub outlook_keywords: Vec<String>,
    /// Concrete catalysts that back an outlook
    pub catalyst_keywords: Vec<String>,
    /// Concrete timeframes that back an outlook
    pub timeframe_keywords: Vec<String>,
}

impl Default for ObConfig {
    fn default() -> Self {
        let words = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            outlook_keywords: words(&[
                "GUIDANCE",
                "OUTLOOK",
                "FORECAST",
                "TARGET",
                "GROWTH STRATEGY",
            ]),
            catalyst_keywords: words(&[
                "CONTRACT",
                "APPROVAL",
                "COMMISSIONING",
                "FIRST PRODUCTION",
                "DRILLING PROGRAM",
                "OFFTAKE",
                "FID",
                "PERMIT",
            ]),
            timeframe_keywords: words(&[
                "Q1", "Q2", "Q3", "Q4", "H1", "H2", "FY2", "CY2", "QUARTER", "HALF YEAR",
                "BY END OF", "BY YEAR END", "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY",
                "JUNE", "JULY", "AUGUST", "SEPTEMBER", "OCTOBER", "NOVEMBER", "DECEMBER",
            ]),
        }
    }
}
