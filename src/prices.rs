//! Date-keyed price lookups.
//!
//! Announcements land on calendar dates, price bars only exist on trading
//! days. Every calculator that needs "the nearest trading day" walks the
//! calendar one day at a time through a shared date->bar map, bounded by a
//! maximum number of calendar days.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::models::PriceBar;

/// Scan direction for trading-day lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Walk toward older dates. Offsets start at 1 (the day itself is
    /// never a "before" day).
    Backward,
    /// Walk toward newer dates. Offsets start at 0 (an announcement made
    /// on a trading day reacts on that same day).
    Forward,
}

/// Price bars for one instrument keyed by calendar date.
pub struct PriceSeries {
    bars: HashMap<NaiveDate, PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars in any order. The first bar seen for a
    /// date wins, matching the one-bar-per-date invariant.
    pub fn new(bars: &[PriceBar]) -> Self {
        let mut map = HashMap::with_capacity(bars.len());
        for bar in bars {
            map.entry(bar.date).or_insert_with(|| bar.clone());
        }
        Self { bars: map }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&PriceBar> {
        self.bars.get(&date)
    }

    /// Nearest available trading day from `date`, walking `direction` up
    /// to `max_calendar_days` calendar days.
    pub fn nearest_trading_day(
        &self,
        date: NaiveDate,
        direction: ScanDirection,
        max_calendar_days: u64,
    ) -> Option<&PriceBar> {
        let start = match direction {
            ScanDirection::Backward => 1,
            ScanDirection::Forward => 0,
        };
        for offset in start..=max_calendar_days {
            if let Some(bar) = self.offset_bar(date, direction, offset) {
                return Some(bar);
            }
        }
        None
    }

    /// The `n`th trading day strictly before `date` (1-based), within
    /// `max_calendar_days` calendar days.
    pub fn nth_trading_day_before(
        &self,
        date: NaiveDate,
        n: usize,
        max_calendar_days: u64,
    ) -> Option<&PriceBar> {
        self.nth_trading_day(date, ScanDirection::Backward, n, max_calendar_days)
    }

    /// The `n`th trading day strictly after `date` (1-based), within
    /// `max_calendar_days` calendar days.
    pub fn nth_trading_day_after(
        &self,
        date: NaiveDate,
        n: usize,
        max_calendar_days: u64,
    ) -> Option<&PriceBar> {
        self.nth_trading_day(date, ScanDirection::Forward, n, max_calendar_days)
    }

    fn nth_trading_day(
        &self,
        date: NaiveDate,
        direction: ScanDirection,
        n: usize,
        max_calendar_days: u64,
    ) -> Option<&PriceBar> {
        let mut seen = 0;
        for offset in 1..=max_calendar_days {
            if let Some(bar) = self.offset_bar(date, direction, offset) {
                seen += 1;
                if seen == n {
                    return Some(bar);
                }
            }
        }
        None
    }

    /// Average daily volume over up to `take` non-zero-volume trading days
    /// scanning `direction` from `date` within `max_calendar_days`.
    /// Returns 0 when no qualifying day exists.
    pub fn average_volume(
        &self,
        date: NaiveDate,
        direction: ScanDirection,
        max_calendar_days: u64,
        take: usize,
    ) -> i64 {
        let start = match direction {
            ScanDirection::Backward => 1,
            ScanDirection::Forward => 0,
        };
        let mut total: i64 = 0;
        let mut count: i64 = 0;
        for offset in start..=max_calendar_days {
            if count as usize >= take {
                break;
            }
            if let Some(bar) = self.offset_bar(date, direction, offset) {
                if bar.volume > 0 {
                    total += bar.volume;
                    count += 1;
                }
            }
        }
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    fn offset_bar(
        &self,
        date: NaiveDate,
        direction: ScanDirection,
        offset: u64,
    ) -> Option<&PriceBar> {
        let day = match direction {
            ScanDirection::Backward => date.checked_sub_days(Days::new(offset))?,
            ScanDirection::Forward => date.checked_add_days(Days::new(offset))?,
        };
        self.bars.get(&day)
    }
}
