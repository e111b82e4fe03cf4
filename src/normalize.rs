//! Wire-record normalization.
//!
//! Upstream collaborators deliver announcements and price bars as loosely
//! typed records with string dates. Conversion to typed models happens
//! here: malformed rows are skipped with a warning rather than failing the
//! batch, and a missing announcement date survives as `None`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::announcements::RawAnnouncement;
use crate::error::{Result, SignalError};
use crate::models::PriceBar;

/// Announcement row as delivered by a fetch collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementRecord {
    /// RFC 3339 or `YYYY-MM-DD`; empty when the source had no date
    #[serde(default)]
    pub date: String,
    pub headline: String,
    #[serde(rename = "type", default)]
    pub ann_type: String,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub document_key: String,
    #[serde(default)]
    pub price_sensitive: bool,
}

/// Price bar row as delivered by a price-data collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBarRecord {
    pub date: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}

/// Convert one announcement record. Fails only on an unparseable date.
pub fn normalize_announcement(record: &AnnouncementRecord) -> Result<RawAnnouncement> {
    Ok(RawAnnouncement {
        date: parse_announcement_date(&record.date)?,
        headline: record.headline.clone(),
        ann_type: record.ann_type.clone(),
        pdf_url: record.pdf_url.clone(),
        document_key: record.document_key.clone(),
        price_sensitive: record.price_sensitive,
    })
}

/// Convert a batch of announcement records, skipping malformed rows.
pub fn normalize_announcements(records: &[AnnouncementRecord]) -> Vec<RawAnnouncement> {
    records
        .iter()
        .filter_map(|record| match normalize_announcement(record) {
            Ok(ann) => Some(ann),
            Err(err) => {
                warn!(headline = %record.headline, %err, "skipping malformed announcement record");
                None
            }
        })
        .collect()
}

/// Convert one price bar record. A bar without a valid date is useless,
/// so the date is required here.
pub fn normalize_price_bar(record: &PriceBarRecord) -> Result<PriceBar> {
    let date = parse_bar_date(&record.date)?;
    if record.volume < 0 {
        return Err(SignalError::InvalidRecord(format!(
            "negative volume {} on {}",
            record.volume, record.date
        )));
    }
    Ok(PriceBar {
        date,
        open: record.open,
        high: record.high,
        low: record.low,
        close: record.close,
        volume: record.volume,
    })
}

/// Convert a batch of price bar records, skipping malformed rows.
pub fn normalize_price_bars(records: &[PriceBarRecord]) -> Vec<PriceBar> {
    records
        .iter()
        .filter_map(|record| match normalize_price_bar(record) {
            Ok(bar) => Some(bar),
            Err(err) => {
                warn!(date = %record.date, %err, "skipping malformed price bar record");
                None
            }
        })
        .collect()
}

/// RFC 3339 first, date-only second; empty means the source had no date.
fn parse_announcement_date(value: &str) -> Result<Option<DateTime<Utc>>> {
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight exists");
        return Ok(Some(DateTime::from_naive_utc_and_offset(midnight, Utc)));
    }
    Err(SignalError::InvalidDate(value.to_string()))
}

fn parse_bar_date(value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    Err(SignalError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> AnnouncementRecord {
        AnnouncementRecord {
            date: date.to_string(),
            headline: "Quarterly Activities Report".to_string(),
            ann_type: "Periodic Reports".to_string(),
            pdf_url: String::new(),
            document_key: String::new(),
            price_sensitive: true,
        }
    }

    #[test]
    fn parses_both_date_formats() {
        let rfc = normalize_announcement(&record("2026-01-08T10:30:00+11:00")).unwrap();
        assert_eq!(rfc.date.unwrap().date_naive().to_string(), "2026-01-07");

        let plain = normalize_announcement(&record("2026-01-08")).unwrap();
        assert_eq!(plain.date.unwrap().date_naive().to_string(), "2026-01-08");
    }

    #[test]
    fn empty_date_survives_as_none() {
        let ann = normalize_announcement(&record("")).unwrap();
        assert!(ann.date.is_none());
    }

    #[test]
    fn batch_skips_malformed_rows() {
        let records = vec![record("2026-01-08"), record("not-a-date"), record("2026-01-09")];
        let result = normalize_announcements(&records);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn rejects_negative_volume() {
        let record = PriceBarRecord {
            date: "2026-01-08".to_string(),
            open: Decimal::ONE,
            high: Decimal::ONE,
            low: Decimal::ONE,
            close: Decimal::ONE,
            volume: -1,
        };
        assert!(normalize_price_bar(&record).is_err());
        assert!(normalize_price_bars(&[record]).is_empty());
    }

    #[test]
    fn bar_requires_a_date() {
        let record = PriceBarRecord {
            date: String::new(),
            open: Decimal::ONE,
            high: Decimal::ONE,
            low: Decimal::ONE,
            close: Decimal::ONE,
            volume: 0,
        };
        assert!(normalize_price_bar(&record).is_err());
    }
}
