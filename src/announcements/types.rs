//! Announcement entities and classification results.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An unprocessed exchange announcement.
///
/// A missing source date is `None` and is excluded from all date-keyed
/// operations (dedup grouping, price impact).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnnouncement {
    pub date: Option<DateTime<Utc>>,
    pub headline: String,
    #[serde(rename = "type")]
    pub ann_type: String,
    pub pdf_url: String,
    pub document_key: String,
    pub price_sensitive: bool,
}

/// Relevance tier assigned from keyword tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelevanceCategory {
    High,
    Medium,
    Low,
    Noise,
}

impl RelevanceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceCategory::High => "HIGH",
            RelevanceCategory::Medium => "MEDIUM",
            RelevanceCategory::Low => "LOW",
            RelevanceCategory::Noise => "NOISE",
        }
    }
}

/// Signal quality of an announcement based on market impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalNoiseRating {
    /// Significant market impact: price change >= 3% or volume ratio >= 2x
    #[serde(rename = "HIGH_SIGNAL")]
    HighSignal,
    /// Notable market reaction: price change >= 1.5% or volume ratio >= 1.5x
    #[serde(rename = "MODERATE_SIGNAL")]
    ModerateSignal,
    /// Minimal but detectable reaction: price change >= 0.5% or volume ratio >= 1.2x
    #[serde(rename = "LOW_SIGNAL")]
    LowSignal,
    /// No meaningful price/volume impact
    #[serde(rename = "NOISE")]
    Noise,
    /// Standard administrative filing, excluded from signal analysis
    #[serde(rename = "ROUTINE")]
    Routine,
    /// No price data available to assess
    #[serde(rename = "NONE")]
    None,
}

impl SignalNoiseRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalNoiseRating::HighSignal => "HIGH_SIGNAL",
            SignalNoiseRating::ModerateSignal => "MODERATE_SIGNAL",
            SignalNoiseRating::LowSignal => "LOW_SIGNAL",
            SignalNoiseRating::Noise => "NOISE",
            SignalNoiseRating::Routine => "ROUTINE",
            SignalNoiseRating::None => "NONE",
        }
    }
}

/// Why an announcement's market reaction contradicted its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyType {
    /// Price-sensitive flag but the market barely moved
    NoReaction,
    /// Non-price-sensitive filing triggered a real reaction
    UnexpectedReaction,
}

/// Strength of the immediate price/volume reaction window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactSignal {
    Significant,
    Moderate,
    Minimal,
}

/// Price and volume movement around an announcement date.
///
/// `None` (rather than a partially-filled struct) when price coverage is
/// insufficient for either the on-date or the before lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceImpactData {
    /// Close one trading day before the announcement
    pub price_before: Decimal,
    /// Close on the announcement day (or next trading day)
    pub price_after: Decimal,
    /// Immediate reaction, percent. 0 when the before-close is not positive.
    pub change_percent: f64,
    /// Average volume over up to 5 trading days before
    pub volume_before: i64,
    /// Average volume over up to 5 trading days from the announcement on
    pub volume_after: i64,
    /// after/before ratio, 1.0 when the before average is 0
    pub volume_change_ratio: f64,
    pub impact_signal: ImpactSignal,

    // Pre-announcement drift (T-5 to T-1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_announcement_drift: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_announcement_price_t5: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_announcement_price_t1: Option<Decimal>,
    pub has_significant_pre_drift: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_drift_interpretation: Option<String>,
}

/// Full result of signal-to-noise analysis for one announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalNoiseResult {
    pub rating: SignalNoiseRating,
    pub rationale: String,
    pub is_anomaly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_type: Option<AnomalyType>,
}

/// An announcement with every derived classification attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedAnnouncement {
    // Raw data
    pub date: Option<DateTime<Utc>>,
    pub headline: String,
    #[serde(rename = "type")]
    pub ann_type: String,
    pub pdf_url: String,
    pub document_key: String,
    pub price_sensitive: bool,

    // Relevance classification (keyword based)
    pub relevance_category: RelevanceCategory,
    pub relevance_reason: String,

    // Signal-to-noise analysis (market impact based)
    pub signal_noise_rating: SignalNoiseRating,
    pub signal_noise_rationale: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_impact: Option<PriceImpactData>,

    // Detection flags
    pub is_trading_halt: bool,
    pub is_reinstatement: bool,
    pub is_dividend_announcement: bool,
    pub is_routine: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_type: Option<String>,

    // Anomaly detection
    pub is_anomaly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_type: Option<AnomalyType>,
}

/// A set of similar same-day announcements collapsed into one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeduplicationGroup {
    pub date: NaiveDate,
    pub headlines: Vec<String>,
    pub count: usize,
}

/// Totals for one deduplication run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeduplicationStats {
    pub total_before: usize,
    pub total_after: usize,
    pub duplicates_found: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub groups: Vec<DeduplicationGroup>,
}

/// Market Quality Signal scores for one processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MqsScores {
    /// (high + moderate signal) / (noise + routine); 1.0 when all signal,
    /// 0.0 when neither
    pub signal_to_noise_ratio: f64,
    pub high_signal_count: usize,
    pub routine_count: usize,
}

/// Aggregated counts across all processed announcements for one run.
///
/// The relevance counts always sum to `total_count`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingSummary {
    pub total_count: usize,
    pub high_relevance_count: usize,
    pub medium_relevance_count: usize,
    pub low_relevance_count: usize,
    pub noise_count: usize,
    pub high_signal_count: usize,
    pub moderate_signal_count: usize,
    pub low_signal_count: usize,
    pub routine_count: usize,
    pub anomaly_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mqs_scores: Option<MqsScores>,
}
