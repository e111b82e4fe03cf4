//! Capital discipline score (CDS), 0-2.
//!
//! Measures dilution through the 3-year share-count CAGR and the cadence
//! of trading halts and capital raises over the analysis window.

use super::config::RatingConfig;
use super::types::{Announcement, AnnouncementType, CdsComponents, CdsResult, Fundamentals};

/// Calculate the capital discipline score.
///
/// Halt/raise frequency is annualized over `config.analysis_period_months`.
pub fn calculate_cds(
    fundamentals: &Fundamentals,
    announcements: &[Announcement],
    config: &RatingConfig,
) -> CdsResult {
    let cagr = shares_cagr(
        fundamentals.shares_outstanding_current,
        fundamentals.shares_outstanding_3y_ago,
    );

    let years = f64::from(config.analysis_period_months) / 12.0;
    let halts = announcements
        .iter()
        .filter(|a| a.ann_type == AnnouncementType::TradingHalt)
        .count();
    let raises = announcements
        .iter()
        .filter(|a| a.ann_type == AnnouncementType::CapitalRaise)
        .count();
    let trading_halts_pa = if years > 0.0 { halts as f64 / years } else { 0.0 };
    let capital_raises_pa = if years > 0.0 { raises as f64 / years } else { 0.0 };

    let components = CdsComponents {
        shares_cagr: cagr,
        trading_halts_pa,
        capital_raises_pa,
        analysis_period_months: config.analysis_period_months,
    };

    let mut issues = Vec::new();
    if cagr > config.cagr_moderate {
        issues.push(format!("share count growing {:.0}%/yr", cagr * 100.0));
    }
    if trading_halts_pa > config.max_halts_per_year {
        issues.push(format!("{trading_halts_pa:.1} trading halts/yr"));
    }
    if capital_raises_pa > config.max_raises_per_year {
        issues.push(format!("{capital_raises_pa:.1} capital raises/yr"));
    }

    let score = if cagr > config.cagr_severe {
        0
    } else {
        2 - (issues.len() as u8).min(2)
    };

    let reasoning = if issues.is_empty() {
        format!(
            "Disciplined capital management: dilution {:.0}%/yr, {trading_halts_pa:.1} halts/yr, {capital_raises_pa:.1} raises/yr over {} months",
            cagr * 100.0,
            config.analysis_period_months
        )
    } else if cagr > config.cagr_severe {
        format!(
            "Severe dilution: share count growing {:.0}%/yr over 3 years",
            cagr * 100.0
        )
    } else {
        format!("Capital discipline concerns: {}", issues.join(", "))
    };

    CdsResult {
        score,
        components,
        reasoning,
    }
}

/// 3-year compound annual growth rate of the share count.
///
/// 0.0 when the historical baseline is missing or non-positive.
pub(crate) fn shares_cagr(current: i64, three_years_ago: Option<i64>) -> f64 {
    match three_years_ago {
        Some(base) if base > 0 && current > 0 => {
            (current as f64 / base as f64).powf(1.0 / 3.0) - 1.0
        }
        _ => 0.0,
    }
}
