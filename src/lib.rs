//! Announcement signal analysis and investability rating.
//!
//! Two pure computation engines over in-memory market data:
//!
//! - [`announcements`]: deduplicates raw corporate announcements,
//!   classifies relevance and special categories, measures the price and
//!   volume reaction window, and rates each announcement as signal or
//!   noise.
//! - [`rating`]: derives six independent sub-scores from fundamentals,
//!   typed announcements, and price history, then combines them through a
//!   gated weighted formula into a 0-100 investability value and label.
//!
//! Every call is synchronous, deterministic, and side-effect free; missing
//! data degrades to sentinel or neutral values instead of errors. Data
//! fetching, orchestration, and persistence live with the caller.

pub mod announcements;
pub mod error;
pub mod models;
pub mod normalize;
pub mod prices;
pub mod rating;

pub use announcements::{
    calculate_price_impact, calculate_signal_noise, classify_relevance,
    deduplicate_announcements, process_announcements, DeduplicationStats, PriceImpactData,
    ProcessedAnnouncement, ProcessingSummary, RawAnnouncement, RelevanceCategory,
    SignalNoiseRating,
};
pub use error::{Result, SignalError};
pub use models::PriceBar;
pub use prices::{PriceSeries, ScanDirection};
pub use rating::{
    calculate_rating, rate_company, Announcement, AnnouncementType, Fundamentals, RatingConfig,
    RatingLabel, RatingResult,
};
