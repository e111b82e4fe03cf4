//! Balance-sheet strength score (BFS), 0-2.
//!
//! Counts up to four foundation indicators: meaningful revenue, a cash
//! runway beyond the floor, a producing asset, and profitability. The
//! score caps at 2 - two solid indicators already clear the gate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::config::RatingConfig;
use super::types::{BfsComponents, BfsResult, Fundamentals};

/// Calculate the balance-sheet strength score from a fundamentals snapshot.
pub fn calculate_bfs(fundamentals: &Fundamentals, config: &RatingConfig) -> BfsResult {
    let runway = cash_runway_months(fundamentals);

    let has_revenue = fundamentals.revenue_ttm > config.revenue_floor;
    // No burn means infinite runway.
    let has_runway = match runway {
        Some(months) => months > config.runway_floor_months,
        None => true,
    };

    let components = BfsComponents {
        has_revenue,
        revenue_amount: fundamentals.revenue_ttm,
        cash_runway_months: runway,
        has_producing_asset: fundamentals.has_producing_asset,
        is_profitable: fundamentals.is_profitable,
    };

    let mut met = Vec::new();
    if has_revenue {
        met.push(format!(
            "revenue ${:.1}M TTM",
            (fundamentals.revenue_ttm / Decimal::from(1_000_000))
                .to_f64()
                .unwrap_or(0.0)
        ));
    }
    if has_runway {
        match runway {
            Some(months) => met.push(format!("cash runway {months:.0} months")),
            None => met.push("no cash burn".to_string()),
        }
    }
    if fundamentals.has_producing_asset {
        met.push("producing asset".to_string());
    }
    if fundamentals.is_profitable {
        met.push("profitable".to_string());
    }

    let indicator_count = met.len() as u8;
    let score = indicator_count.min(2);

    let reasoning = if met.is_empty() {
        "0 of 4 foundation indicators met - no material revenue, limited cash runway, no producing asset, not profitable".to_string()
    } else {
        format!("{indicator_count} of 4 foundation indicators met: {}", met.join(", "))
    };

    BfsResult {
        score,
        indicator_count,
        components,
        reasoning,
    }
}

/// Months of cash at the current burn rate; `None` when there is no burn.
fn cash_runway_months(fundamentals: &Fundamentals) -> Option<f64> {
    if fundamentals.quarterly_cash_burn <= Decimal::ZERO {
        return None;
    }
    let monthly_burn = fundamentals.quarterly_cash_burn / Decimal::from(3);
    (fundamentals.cash_balance / monthly_burn).to_f64()
}
