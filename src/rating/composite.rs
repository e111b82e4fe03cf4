//! Composite investability rating.
//!
//! A pass/fail gate on the two foundation scores decides whether a numeric
//! score is computed at all; a failed gate yields a missing score, not a
//! low one. Past the gate the six components combine through fixed weights
//! into a 0-100 investability value and its label.

use tracing::debug;

use super::bfs::calculate_bfs;
use super::cds::calculate_cds;
use super::config::RatingConfig;
use super::nfr::calculate_nfr;
use super::ob::calculate_ob;
use super::pps::calculate_pps;
use super::types::{
    Announcement, BfsResult, CdsResult, Fundamentals, NfrResult, ObResult, PpsResult,
    RatingLabel, RatingResult, RatingScores, VrsResult,
};
use super::vrs::calculate_vrs;
use crate::models::PriceBar;
use crate::prices::PriceSeries;

/// Minimum BFS and CDS score to compute an investability value
const GATE_MIN_SCORE: u8 = 1;

// Component weights; gate scores are normalized to [0,1] before weighting.
const BFS_WEIGHT: f64 = 12.5;
const CDS_WEIGHT: f64 = 12.5;
const NFR_WEIGHT: f64 = 25.0;
const PPS_WEIGHT: f64 = 25.0;
const VRS_WEIGHT: f64 = 15.0;
const OB_WEIGHT: f64 = 10.0;

// Label thresholds; a boundary value resolves to the higher label.
const LOW_ALPHA_FLOOR: f64 = 25.0;
const WATCHLIST_FLOOR: f64 = 50.0;
const INVESTABLE_FLOOR: f64 = 65.0;
const HIGH_CONVICTION_FLOOR: f64 = 80.0;

/// Gate outcome over the two foundation scores
enum Gate {
    Passed,
    Failed { failed: Vec<&'static str> },
}

fn check_gate(bfs: &BfsResult, cds: &CdsResult) -> Gate {
    let mut failed = Vec::new();
    if bfs.score < GATE_MIN_SCORE {
        failed.push("BFS");
    }
    if cds.score < GATE_MIN_SCORE {
        failed.push("CDS");
    }
    if failed.is_empty() {
        Gate::Passed
    } else {
        Gate::Failed { failed }
    }
}

/// Combine the six component scores into the final rating.
pub fn calculate_rating(
    bfs: BfsResult,
    cds: CdsResult,
    nfr: NfrResult,
    pps: PpsResult,
    vrs: VrsResult,
    ob: ObResult,
) -> RatingResult {
    match check_gate(&bfs, &cds) {
        Gate::Failed { failed } => {
            let reasoning = format!(
                "Gate failed ({}): BFS {}/2, CDS {}/2 - investability not scored",
                failed.join(", "),
                bfs.score,
                cds.score
            );
            debug!(bfs = bfs.score, cds = cds.score, "rating gate failed");
            RatingResult {
                label: RatingLabel::Speculative,
                investability: None,
                gate_passed: false,
                scores: RatingScores {
                    bfs,
                    cds,
                    nfr,
                    pps,
                    vrs,
                    ob,
                },
                reasoning,
            }
        }
        Gate::Passed => {
            let investability = (f64::from(bfs.score) / 2.0) * BFS_WEIGHT
                + (f64::from(cds.score) / 2.0) * CDS_WEIGHT
                + nfr.score * NFR_WEIGHT
                + pps.score * PPS_WEIGHT
                + vrs.score * VRS_WEIGHT
                + ob.score * OB_WEIGHT;
            let investability = investability.clamp(0.0, 100.0);
            let label = label_for(investability);

            let reasoning = format!(
                "Investability {investability:.1}/100 ({label}) - BFS {}/2, CDS {}/2, NFR {:.2}, PPS {:.2}, VRS {:.2}, OB {:.1}",
                bfs.score,
                cds.score,
                nfr.score,
                pps.score,
                vrs.score,
                ob.score,
                label = label.as_str()
            );
            debug!(investability, label = label.as_str(), "rating computed");

            RatingResult {
                label,
                investability: Some(investability),
                gate_passed: true,
                scores: RatingScores {
                    bfs,
                    cds,
                    nfr,
                    pps,
                    vrs,
                    ob,
                },
                reasoning,
            }
        }
    }
}

fn label_for(investability: f64) -> RatingLabel {
    if investability >= HIGH_CONVICTION_FLOOR {
        RatingLabel::HighConviction
    } else if investability >= INVESTABLE_FLOOR {
        RatingLabel::Investable
    } else if investability >= WATCHLIST_FLOOR {
        RatingLabel::Watchlist
    } else if investability >= LOW_ALPHA_FLOOR {
        RatingLabel::LowAlpha
    } else {
        RatingLabel::Speculative
    }
}

/// Compute all six sub-scores and the composite in one call.
pub fn rate_company(
    fundamentals: &Fundamentals,
    announcements: &[Announcement],
    prices: &[PriceBar],
    config: &RatingConfig,
) -> RatingResult {
    let series = PriceSeries::new(prices);

    let bfs = calculate_bfs(fundamentals, config);
    let cds = calculate_cds(fundamentals, announcements, config);
    let nfr = calculate_nfr(announcements);
    let pps = calculate_pps(announcements, &series, config);
    let vrs = calculate_vrs(prices, &config.vrs);
    let ob = calculate_ob(announcements, &config.ob);

    calculate_rating(bfs, cds, nfr, pps, vrs, ob)
}
