//! Core types for the fridge inventory.

use crate::error::{FridgeError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date layout used for both stored columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days ahead of today that still count as "expiring soon".
pub const DEFAULT_WARNING_DAYS: i64 = 3;

/// Column names of the persisted table, in order.
pub const COLUMNS: [&str; 3] = ["name", "purchase_date", "expiry_date"];

/// One tracked item.
///
/// Dates are kept as the text the user entered. Names are not unique; two
/// records with the same name are distinct rows.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub purchase_date: String,
    pub expiry_date: String,
}

impl FoodRecord {
    pub fn new(
        name: impl Into<String>,
        purchase_date: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            purchase_date: purchase_date.into(),
            expiry_date: expiry_date.into(),
        }
    }

    /// Parse the expiry column.
    pub fn expiry(&self) -> Result<NaiveDate> {
        parse_date("expiry_date", &self.expiry_date)
    }
}

impl fmt::Display for FoodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} -> {})",
            self.name, self.purchase_date, self.expiry_date
        )
    }
}

/// Parse a strict, zero-padded `YYYY-MM-DD` date.
///
/// Fixed width matters: listings sort the raw strings, which is only
/// chronological when every date has the same layout.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let invalid = || FridgeError::InvalidDateFormat {
        field: field.to_string(),
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Where a record sits relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// Expires today or within the warning window.
    ExpiringSoon { days_left: i64 },
    /// Expiry date is strictly before today.
    Expired { days_ago: i64 },
    /// Further out than the warning window.
    Fresh,
}

impl ExpiryStatus {
    /// Classify by whole-day difference between `expiry` and `today`.
    pub fn classify(expiry: NaiveDate, today: NaiveDate, window_days: i64) -> Self {
        let diff_days = expiry.signed_duration_since(today).num_days();
        if diff_days < 0 {
            ExpiryStatus::Expired {
                days_ago: diff_days.abs(),
            }
        } else if diff_days <= window_days {
            ExpiryStatus::ExpiringSoon {
                days_left: diff_days,
            }
        } else {
            ExpiryStatus::Fresh
        }
    }
}

/// A reported record with its day count (left or elapsed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpiryEntry {
    pub record: FoodRecord,
    pub days: i64,
}

/// Result of an expiry check. Both sections keep load order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpiryReport {
    pub expiring_soon: Vec<ExpiryEntry>,
    pub expired: Vec<ExpiryEntry>,
}

impl ExpiryReport {
    pub fn is_empty(&self) -> bool {
        self.expiring_soon.is_empty() && self.expired.is_empty()
    }
}
