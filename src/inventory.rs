//! Inventory operations over the record store.
//!
//! Every operation is a full read-modify-write cycle: load the whole table,
//! work on it in memory, and save it back when it changed shape.

use crate::error::Result;
use crate::store::Store;
use crate::types::{ExpiryEntry, ExpiryReport, ExpiryStatus, FoodRecord, DEFAULT_WARNING_DAYS};
use chrono::{Local, NaiveDate};

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Add, remove and inspect the items in the fridge.
#[derive(Clone, Debug)]
pub struct Inventory {
    store: Store,
}

impl Inventory {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Append a record. Dates are stored as given, unchecked.
    pub fn add(
        &self,
        name: &str,
        purchase_date: &str,
        expiry_date: &str,
    ) -> Result<FoodRecord> {
        let mut records = self.store.load()?;
        let record = FoodRecord::new(name, purchase_date, expiry_date);
        records.push(record.clone());
        self.store.save(&records)?;

        tracing::debug!(name, total = records.len(), "added record");
        Ok(record)
    }

    /// Remove every record named exactly `name`.
    ///
    /// The table is rewritten even when nothing matched. Returns the number
    /// of records removed.
    pub fn delete(&self, name: &str) -> Result<usize> {
        let mut records = self.store.load()?;
        let before = records.len();
        records.retain(|record| record.name != name);
        let removed = before - records.len();
        self.store.save(&records)?;

        tracing::debug!(name, removed, "deleted records");
        Ok(removed)
    }

    /// All records, soonest expiry first.
    ///
    /// Compares the raw `YYYY-MM-DD` strings; ties keep load order.
    pub fn list_all(&self) -> Result<Vec<FoodRecord>> {
        let mut records = self.store.load()?;
        records.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));
        Ok(records)
    }

    /// Split records into expiring-soon and expired relative to `today`.
    ///
    /// Every expiry date is parsed before anything is classified, so one bad
    /// date fails the whole check.
    pub fn check_expiry(&self, today: NaiveDate, window_days: i64) -> Result<ExpiryReport> {
        let records = self.store.load()?;
        let dated = records
            .into_iter()
            .map(|record| record.expiry().map(|expiry| (record, expiry)))
            .collect::<Result<Vec<_>>>()?;

        let mut report = ExpiryReport::default();
        for (record, expiry) in dated {
            match ExpiryStatus::classify(expiry, today, window_days) {
                ExpiryStatus::ExpiringSoon { days_left } => report.expiring_soon.push(ExpiryEntry {
                    record,
                    days: days_left,
                }),
                ExpiryStatus::Expired { days_ago } => report.expired.push(ExpiryEntry {
                    record,
                    days: days_ago,
                }),
                ExpiryStatus::Fresh => {}
            }
        }

        tracing::debug!(
            %today,
            window_days,
            soon = report.expiring_soon.len(),
            expired = report.expired.len(),
            "checked expiry"
        );
        Ok(report)
    }

    /// [`Inventory::check_expiry`] against the local date with the default window.
    pub fn check_expiry_now(&self) -> Result<ExpiryReport> {
        self.check_expiry(today(), DEFAULT_WARNING_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FridgeError;
    use crate::store::StoreConfig;
    use crate::types::DATE_FORMAT;
    use tempfile::TempDir;

    fn test_inventory(dir: &TempDir) -> Inventory {
        Inventory::new(Store::new(StoreConfig::new(dir.path().join("fridge.csv"))))
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn names(records: &[ExpiryEntry]) -> Vec<(&str, i64)> {
        records
            .iter()
            .map(|e| (e.record.name.as_str(), e.days))
            .collect()
    }

    #[test]
    fn test_add_appends() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);

        inventory.add("milk", "2024-01-01", "2024-01-05").unwrap();
        inventory.add("eggs", "2024-01-01", "2024-02-01").unwrap();
        let added = inventory.add("milk", "2024-01-02", "2024-01-06").unwrap();

        assert_eq!(added, FoodRecord::new("milk", "2024-01-02", "2024-01-06"));
        assert_eq!(
            inventory.store().load().unwrap(),
            vec![
                FoodRecord::new("milk", "2024-01-01", "2024-01-05"),
                FoodRecord::new("eggs", "2024-01-01", "2024-02-01"),
                FoodRecord::new("milk", "2024-01-02", "2024-01-06"),
            ]
        );
    }

    #[test]
    fn test_add_does_not_validate_dates() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);

        inventory.add("mystery", "yesterday", "someday").unwrap();
        assert_eq!(inventory.store().load().unwrap()[0].expiry_date, "someday");
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);
        inventory.add("milk", "2024-01-01", "2024-01-05").unwrap();
        inventory.add("milk", "2024-01-02", "2024-01-06").unwrap();
        inventory.add("eggs", "2024-01-01", "2024-02-01").unwrap();

        assert_eq!(inventory.delete("milk").unwrap(), 2);
        assert_eq!(
            inventory.store().load().unwrap(),
            vec![FoodRecord::new("eggs", "2024-01-01", "2024-02-01")]
        );
    }

    #[test]
    fn test_delete_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);
        inventory.add("Milk", "2024-01-01", "2024-01-05").unwrap();

        assert_eq!(inventory.delete("milk").unwrap(), 0);
        assert_eq!(inventory.store().load().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_miss_still_writes_table() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);

        assert_eq!(inventory.delete("ghost").unwrap(), 0);
        assert!(inventory.store().path().exists());
        assert!(inventory.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_by_expiry() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);
        inventory.add("a", "2024-01-01", "2024-03-05").unwrap();
        inventory.add("b", "2024-01-01", "2024-01-20").unwrap();
        inventory.add("c", "2024-01-01", "2024-02-10").unwrap();

        let listed: Vec<String> = inventory
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.expiry_date)
            .collect();
        assert_eq!(listed, vec!["2024-01-20", "2024-02-10", "2024-03-05"]);

        // Listing does not reorder the table itself.
        assert_eq!(inventory.store().load().unwrap()[0].name, "a");
    }

    #[test]
    fn test_list_ties_keep_load_order() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);
        inventory.add("first", "2024-01-01", "2024-02-01").unwrap();
        inventory.add("early", "2024-01-01", "2024-01-01").unwrap();
        inventory.add("second", "2024-01-02", "2024-02-01").unwrap();

        let listed: Vec<String> = inventory.list_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(listed, vec!["early", "first", "second"]);
    }

    #[test]
    fn test_check_expiry_classification() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);
        inventory.add("yogurt", "2024-01-01", "2024-01-13").unwrap();
        inventory.add("butter", "2024-01-01", "2024-01-14").unwrap();
        inventory.add("tofu", "2024-01-01", "2024-01-09").unwrap();
        inventory.add("milk", "2024-01-01", "2024-01-10").unwrap();

        let report = inventory.check_expiry(date("2024-01-10"), 3).unwrap();

        assert_eq!(names(&report.expiring_soon), vec![("yogurt", 3), ("milk", 0)]);
        assert_eq!(names(&report.expired), vec![("tofu", 1)]);
    }

    #[test]
    fn test_check_expiry_custom_window() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);
        inventory.add("butter", "2024-01-01", "2024-01-17").unwrap();

        let narrow = inventory.check_expiry(date("2024-01-10"), 3).unwrap();
        assert!(narrow.is_empty());

        let wide = inventory.check_expiry(date("2024-01-10"), 7).unwrap();
        assert_eq!(names(&wide.expiring_soon), vec![("butter", 7)]);
    }

    #[test]
    fn test_check_expiry_bad_date_aborts() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);
        inventory.add("tofu", "2024-01-01", "2024-01-09").unwrap();
        inventory.add("mystery", "2024-01-01", "next week").unwrap();

        let result = inventory.check_expiry(date("2024-01-10"), 3);
        match result {
            Err(FridgeError::InvalidDateFormat { field, value }) => {
                assert_eq!(field, "expiry_date");
                assert_eq!(value, "next week");
            }
            other => panic!("expected InvalidDateFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_check_expiry_empty() {
        let dir = TempDir::new().unwrap();
        let inventory = test_inventory(&dir);

        assert!(inventory.check_expiry_now().unwrap().is_empty());
    }
}
