//! Human-readable text for inventory results.
//!
//! Every function returns the lines to print, without trailing newlines.

use crate::types::{ExpiryEntry, ExpiryReport, FoodRecord};

pub const BANNER: &str = "=== Fridge Expiry Tracker ===";
pub const MENU: &str = "1. Add item  2. Delete item  3. List all  4. Check expiry  5. Quit";
pub const FAREWELL: &str = "Goodbye.";
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";

pub fn added(name: &str) -> String {
    format!("Added {}.", name)
}

pub fn deleted(name: &str) -> String {
    format!("Deleted {}.", name)
}

pub fn invalid_date(value: &str) -> String {
    format!("Invalid date '{}': expected YYYY-MM-DD.", value)
}

/// Listing of already-sorted records.
pub fn listing(records: &[FoodRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No items in the fridge.".to_string()];
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push("All items:".to_string());
    lines.extend(records.iter().map(|r| {
        format!(
            "{} | purchased: {} | expires: {}",
            r.name, r.purchase_date, r.expiry_date
        )
    }));
    lines
}

fn days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

fn section(
    lines: &mut Vec<String>,
    title: &str,
    entries: &[ExpiryEntry],
    empty: &str,
    line: impl Fn(&ExpiryEntry) -> String,
) {
    if entries.is_empty() {
        lines.push(empty.to_string());
    } else {
        lines.push(title.to_string());
        lines.extend(entries.iter().map(line));
    }
}

/// Expiring-soon section followed by the expired section.
///
/// Both sections always print, with a placeholder line when empty.
pub fn expiry_report(report: &ExpiryReport) -> Vec<String> {
    let mut lines = Vec::new();
    section(
        &mut lines,
        "Expiring soon:",
        &report.expiring_soon,
        "Nothing is expiring soon.",
        |e| {
            format!(
                "{} - {} left (expires: {})",
                e.record.name,
                days(e.days),
                e.record.expiry_date
            )
        },
    );
    section(
        &mut lines,
        "Expired:",
        &report.expired,
        "No expired items.",
        |e| {
            format!(
                "{} - {} ago (expired: {})",
                e.record.name,
                days(e.days),
                e.record.expiry_date
            )
        },
    );
    lines
}
