//! Investability rating engine.
//!
//! Six independent sub-scores over fundamentals, typed announcements, and
//! price history, combined through a gated weighted formula into a final
//! label and 0-100 investability value.

pub mod bfs;
pub mod cds;
pub mod composite;
pub mod config;
pub mod nfr;
pub mod ob;
pub mod pps;
pub mod types;
pub mod vrs;

// Re-export main types and operations for convenience
pub use bfs::calculate_bfs;
pub use cds::calculate_cds;
pub use composite::{calculate_rating, rate_company};
pub use config::{ObConfig, RatingConfig, VrsConfig};
pub use nfr::calculate_nfr;
pub use ob::calculate_ob;
pub use pps::calculate_pps;
pub use types::{
    Announcement, AnnouncementType, BfsComponents, BfsResult, CdsComponents, CdsResult,
    Fundamentals, NfrComponents, NfrResult, ObResult, PpsComponents, PpsResult, RatingLabel,
    RatingResult, RatingScores, VolatilityPattern, VrsComponents, VrsResult,
};
pub use vrs::calculate_vrs;
