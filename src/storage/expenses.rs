//! Expense store
//!
//! One expense per row in `expenses.csv`: owner, timestamp, category,
//! description, amount, kind. Appends for record creation, owner-filtered
//! rewrites for bulk deletion. Scans skip malformed rows with a
//! diagnostic; rewrites preserve every row that does not belong to the
//! target owner, malformed rows included.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{info, warn};

use super::record_io;
use crate::error::FintrackResult;
use crate::models::{EntryTimestamp, ExpenseKind, ExpenseRecord, Money};

const FIELD_OWNER: usize = 0;
const FIELD_TIMESTAMP: usize = 1;
const FIELD_CATEGORY: usize = 2;
const FIELD_DESCRIPTION: usize = 3;
const FIELD_AMOUNT: usize = 4;
const FIELD_KIND: usize = 5;
const EXPENSE_FIELDS: usize = 6;

/// Flat-file store of expense records for authenticated profiles
///
/// Guest expenses never pass through here; the services layer keeps them
/// in the session.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to durable storage
    pub fn append(&self, record: &ExpenseRecord) -> FintrackResult<()> {
        record_io::append_record(
            &self.path,
            [
                record.owner.as_str(),
                &record.timestamp.to_string(),
                record.category.as_str(),
                record.description.as_str(),
                &record.amount.to_string(),
                &record.kind.to_string(),
            ],
        )?;

        info!(
            "Expense recorded for '{}': {} ({})",
            record.owner,
            record.amount,
            record.description
        );
        Ok(())
    }

    /// All records belonging to `owner`, in on-disk (append) order
    ///
    /// Malformed rows are skipped with a diagnostic and never abort the
    /// scan. An absent store is treated as empty.
    pub fn scan(&self, owner: &str) -> FintrackResult<Vec<ExpenseRecord>> {
        let rows = record_io::read_raw_records(&self.path)?;

        let mut records = Vec::new();
        for row in rows {
            if row.get(FIELD_OWNER) != Some(owner) {
                continue;
            }
            match parse_expense(&row) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    warn!("Skipping a malformed expense row for '{}': {}", owner, reason);
                }
            }
        }

        Ok(records)
    }

    /// Rewrite the store omitting every row for `owner`
    ///
    /// Rows for other owners are written back exactly as read. An absent
    /// store is a no-op and stays absent.
    pub fn delete_all(&self, owner: &str) -> FintrackResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let rows = record_io::read_raw_records(&self.path)?;
        let kept: Vec<StringRecord> = rows
            .into_iter()
            .filter(|row| row.get(FIELD_OWNER) != Some(owner))
            .collect();

        record_io::rewrite_records_atomic(&self.path, &kept)?;
        info!("Expenses cleared for '{}'", owner);
        Ok(())
    }
}

fn parse_expense(record: &StringRecord) -> Result<ExpenseRecord, String> {
    if record.len() < EXPENSE_FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            EXPENSE_FIELDS,
            record.len()
        ));
    }

    let amount = Money::parse(&record[FIELD_AMOUNT]).map_err(|e| e.to_string())?;

    let kind_text = &record[FIELD_KIND];
    let kind = ExpenseKind::parse(kind_text)
        .ok_or_else(|| format!("unknown expense kind: {}", kind_text))?;

    // Timestamps never fail to parse; unparsable text is carried raw
    Ok(ExpenseRecord {
        owner: record[FIELD_OWNER].to_string(),
        timestamp: EntryTimestamp::parse(&record[FIELD_TIMESTAMP]),
        category: record[FIELD_CATEGORY].to_string(),
        description: record[FIELD_DESCRIPTION].to_string(),
        amount,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        (temp_dir, store)
    }

    fn sample(owner: &str, category: &str, description: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            owner,
            category,
            description,
            Money::from_cents(cents),
            ExpenseKind::Essential,
        )
    }

    #[test]
    fn test_append_then_scan_preserves_order() {
        let (_temp_dir, store) = create_test_store();

        store.append(&sample("alice", "Food", "Lunch", 1250)).unwrap();
        store.append(&sample("alice", "Food", "Dinner", 2000)).unwrap();
        store.append(&sample("alice", "Travel", "Bus", 300)).unwrap();

        let records = store.scan("alice").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].description, "Lunch");
        assert_eq!(records[1].description, "Dinner");
        assert_eq!(records[2].description, "Bus");
    }

    #[test]
    fn test_scan_is_owner_scoped() {
        let (_temp_dir, store) = create_test_store();

        store.append(&sample("alice", "Food", "Lunch", 1250)).unwrap();
        store.append(&sample("bob", "Food", "Pizza", 900)).unwrap();

        let records = store.scan("alice").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].owner, "alice");
    }

    #[test]
    fn test_scan_absent_store_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.scan("alice").unwrap().is_empty());
    }

    #[test]
    fn test_scan_skips_malformed_rows() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            concat!(
                "alice,2025-01-15 12:00:00,Food,Lunch,12.50,Essential\n",
                "alice,2025-01-15 13:00:00,Food\n",
                "alice,2025-01-15 14:00:00,Food,Snack,not-a-number,Essential\n",
                "alice,2025-01-15 15:00:00,Food,Takeaway,8.00,luxury\n",
                "alice,2025-01-16 09:00:00,Travel,Bus,3.00,Non-Essential\n",
            ),
        )
        .unwrap();

        let records = store.scan("alice").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "Lunch");
        assert_eq!(records[1].description, "Bus");
        assert_eq!(records[1].kind, ExpenseKind::NonEssential);
    }

    #[test]
    fn test_scan_skips_non_ascii_and_overflowing_amounts() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            concat!(
                "alice,2025-01-15 12:00:00,Food,Lunch,12.€,Essential\n",
                "alice,2025-01-15 13:00:00,Food,Feast,99999999999999999,Essential\n",
                "alice,2025-01-15 14:00:00,Food,Banquet,99999999999999999.99,Essential\n",
                "alice,2025-01-16 09:00:00,Travel,Bus,3.00,Non-Essential\n",
            ),
        )
        .unwrap();

        let records = store.scan("alice").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "Bus");
    }

    #[test]
    fn test_scan_keeps_rows_with_unparsable_timestamps() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "alice,sometime last week,Food,Lunch,12.50,Essential\n",
        )
        .unwrap();

        let records = store.scan("alice").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp.date(), None);
        assert_eq!(records[0].amount, Money::from_cents(1250));
    }

    #[test]
    fn test_scan_accepts_case_variant_kind_text() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "alice,2025-01-15 12:00:00,Food,Lunch,12.50,essential\n",
        )
        .unwrap();

        let records = store.scan("alice").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, ExpenseKind::Essential);
    }

    #[test]
    fn test_delete_all_removes_only_owner_rows() {
        let (_temp_dir, store) = create_test_store();

        store.append(&sample("alice", "Food", "Lunch", 1250)).unwrap();
        store.append(&sample("bob", "Food", "Pizza", 900)).unwrap();
        store.append(&sample("alice", "Travel", "Bus", 300)).unwrap();

        store.delete_all("alice").unwrap();

        assert!(store.scan("alice").unwrap().is_empty());
        assert_eq!(store.scan("bob").unwrap().len(), 1);
    }

    #[test]
    fn test_delete_all_preserves_malformed_rows_of_other_owners() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            concat!(
                "alice,2025-01-15 12:00:00,Food,Lunch,12.50,Essential\n",
                "bob,broken-row\n",
                "bob,2025-01-15 13:00:00,Food,Pizza,9.00,Essential\n",
            ),
        )
        .unwrap();

        store.delete_all("alice").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "bob,broken-row\nbob,2025-01-15 13:00:00,Food,Pizza,9.00,Essential\n"
        );
    }

    #[test]
    fn test_delete_all_on_absent_store_creates_nothing() {
        let (_temp_dir, store) = create_test_store();

        store.delete_all("alice").unwrap();

        assert!(!store.path().exists());
    }

    #[test]
    fn test_round_trip_preserves_timestamp_text() {
        let (_temp_dir, store) = create_test_store();

        let record = sample("alice", "Food", "Lunch", 1250);
        let stamp = record.timestamp.to_string();
        store.append(&record).unwrap();

        let records = store.scan("alice").unwrap();
        assert_eq!(records[0].timestamp.to_string(), stamp);
    }
}
