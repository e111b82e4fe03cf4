//! Announcement classification and signal-noise engine.
//!
//! Deduplicates raw filings, classifies relevance and special categories,
//! measures the price/volume reaction window, and rates each announcement
//! as signal or noise.

pub mod dedup;
pub mod impact;
pub mod matchers;
pub mod pipeline;
pub mod signal_noise;
pub mod types;

// Re-export main types and operations for convenience
pub use dedup::deduplicate_announcements;
pub use impact::calculate_price_impact;
pub use matchers::{
    classify_relevance, detect_trading_halt, is_dividend_announcement, is_routine_announcement,
};
pub use pipeline::process_announcements;
pub use signal_noise::calculate_signal_noise;
pub use types::{
    AnomalyType, DeduplicationGroup, DeduplicationStats, ImpactSignal, MqsScores,
    PriceImpactData, ProcessedAnnouncement, ProcessingSummary, RawAnnouncement,
    RelevanceCategory, SignalNoiseRating, SignalNoiseResult,
};
