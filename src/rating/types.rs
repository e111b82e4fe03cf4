//! Rating engine inputs and results.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company financial snapshot used by the BFS and CDS calculators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Trailing-twelve-month revenue
    pub revenue_ttm: Decimal,
    pub cash_balance: Decimal,
    pub quarterly_cash_burn: Decimal,
    pub shares_outstanding_current: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_outstanding_3y_ago: Option<i64>,
    pub is_profitable: bool,
    pub has_producing_asset: bool,
}

/// Coarse announcement category used by the rating calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementType {
    Quarterly,
    AnnualReport,
    Contract,
    Acquisition,
    Drilling,
    TradingHalt,
    CapitalRaise,
    Other,
}

impl AnnouncementType {
    /// Map a raw exchange type string to a category. Substring rules,
    /// checked in priority order.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("trading halt") {
            AnnouncementType::TradingHalt
        } else if label.contains("capital raise") || label.contains("placement") {
            AnnouncementType::CapitalRaise
        } else if label.contains("quarterly") || label.contains("4c") {
            AnnouncementType::Quarterly
        } else if label.contains("annual") || label.contains("4e") {
            AnnouncementType::AnnualReport
        } else if label.contains("drilling") || label.contains("exploration") {
            AnnouncementType::Drilling
        } else if label.contains("acquisition") || label.contains("takeover") {
            AnnouncementType::Acquisition
        } else if label.contains("contract") || label.contains("agreement") {
            AnnouncementType::Contract
        } else {
            AnnouncementType::Other
        }
    }

    /// Fact-based announcements report verifiable outcomes; the rest is
    /// narrative.
    pub fn is_fact_based(&self) -> bool {
        matches!(
            self,
            AnnouncementType::Quarterly
                | AnnouncementType::AnnualReport
                | AnnouncementType::Contract
                | AnnouncementType::Acquisition
        )
    }
}

/// One typed announcement for the rating calculators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub date: Option<DateTime<Utc>>,
    pub headline: String,
    pub ann_type: AnnouncementType,
    pub is_price_sensitive: bool,
}

/// Balance-sheet strength component breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BfsComponents {
    pub has_revenue: bool,
    pub revenue_amount: Decimal,
    /// `None` when the company has no cash burn (infinite runway)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_runway_months: Option<f64>,
    pub has_producing_asset: bool,
    pub is_profitable: bool,
}

/// Balance-sheet strength score, 0-2
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BfsResult {
    pub score: u8,
    pub indicator_count: u8,
    pub components: BfsComponents,
    pub reasoning: String,
}

/// Capital discipline component breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CdsComponents {
    /// 3-year share-count CAGR, as a fraction (0.26 = 26%/yr)
    pub shares_cagr: f64,
    pub trading_halts_pa: f64,
    pub capital_raises_pa: f64,
    pub analysis_period_months: u32,
}

/// Capital discipline score, 0-2
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CdsResult {
    pub score: u8,
    pub components: CdsComponents,
    pub reasoning: String,
}

/// Narrative-to-fact component breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NfrComponents {
    pub total_announcements: usize,
    pub fact_announcements: usize,
    pub narrative_announcements: usize,
    pub fact_ratio: f64,
}

/// Narrative-to-fact ratio, 0.0-1.0
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NfrResult {
    pub score: f64,
    pub components: NfrComponents,
    pub reasoning: String,
}

/// Price progression component breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PpsComponents {
    pub qualifying_events: usize,
    pub average_retention: f64,
}

/// Price progression score, 0.0-1.0
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PpsResult {
    pub score: f64,
    pub components: PpsComponents,
    pub reasoning: String,
}

/// Volatility pattern label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolatilityPattern {
    Stable,
    Shifting,
    Erratic,
    /// Too little history to partition into regimes
    #[default]
    Undefined,
}

impl VolatilityPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityPattern::Stable => "STABLE",
            VolatilityPattern::Shifting => "SHIFTING",
            VolatilityPattern::Erratic => "ERRATIC",
            VolatilityPattern::Undefined => "UNDEFINED",
        }
    }
}

/// Volatility regime component breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VrsComponents {
    pub regime_count: usize,
    pub stable_regimes_pct: f64,
    pub volatility_pattern: VolatilityPattern,
}

/// Volatility regime stability, 0.0-1.0
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VrsResult {
    pub score: f64,
    pub components: VrsComponents,
    pub reasoning: String,
}

/// Outlook credibility, 0.0 / 0.5 / 1.0
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObResult {
    pub score: f64,
    pub catalyst_found: bool,
    pub timeframe_found: bool,
    pub reasoning: String,
}

/// Final investability label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingLabel {
    Speculative,
    LowAlpha,
    Watchlist,
    Investable,
    HighConviction,
}

impl RatingLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLabel::Speculative => "SPECULATIVE",
            RatingLabel::LowAlpha => "LOW_ALPHA",
            RatingLabel::Watchlist => "WATCHLIST",
            RatingLabel::Investable => "INVESTABLE",
            RatingLabel::HighConviction => "HIGH_CONVICTION",
        }
    }
}

/// All six component scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingScores {
    pub bfs: BfsResult,
    pub cds: CdsResult,
    pub nfr: NfrResult,
    pub pps: PpsResult,
    pub vrs: VrsResult,
    pub ob: ObResult,
}

/// Final aggregate rating.
///
/// `investability` is `None` exactly when the gate failed - a missing
/// score, distinct from a computed low score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResult {
    pub label: RatingLabel,
    pub investability: Option<f64>,
    pub gate_passed: bool,
    pub scores: RatingScores,
    pub reasoning: String,
}
