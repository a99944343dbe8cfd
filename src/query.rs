//! Query engine
//!
//! Pure filters and aggregates over expense records already scoped to one
//! owner by the expense store. All filters preserve input (append) order;
//! no sorting is applied.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseKind, ExpenseRecord, Money};

/// Records whose category matches after trimming and lowercasing both sides
pub fn filter_by_category(records: &[ExpenseRecord], category: &str) -> Vec<ExpenseRecord> {
    let wanted = category.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.category.trim().to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Records of the given kind
///
/// Free text becomes an [`ExpenseKind`] at the caller via
/// [`ExpenseKind::parse`], which trims and ignores case.
pub fn filter_by_type(records: &[ExpenseRecord], kind: ExpenseKind) -> Vec<ExpenseRecord> {
    records.iter().filter(|r| r.kind == kind).cloned().collect()
}

/// Records whose timestamp's date component falls within [start, end] inclusive
///
/// Both bounds are YYYY-MM-DD text; an unparsable bound fails with
/// [`FintrackError::InvalidDateFormat`]. A record with an unparsable
/// timestamp is skipped with a diagnostic, never counted as a match.
pub fn filter_by_date_range(
    records: &[ExpenseRecord],
    start: &str,
    end: &str,
) -> FintrackResult<Vec<ExpenseRecord>> {
    let start_date = parse_date_bound(start)?;
    let end_date = parse_date_bound(end)?;

    let mut matches = Vec::new();
    for record in records {
        match record.timestamp.date() {
            Some(date) => {
                if date >= start_date && date <= end_date {
                    matches.push(record.clone());
                }
            }
            None => {
                warn!(
                    "Skipping a row with an invalid date format: {}",
                    record.timestamp
                );
            }
        }
    }

    Ok(matches)
}

/// Parse a YYYY-MM-DD range bound
pub fn parse_date_bound(text: &str) -> FintrackResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| FintrackError::InvalidDateFormat(trimmed.to_string()))
}

/// Sum of amounts over all records; an empty slice sums to zero
pub fn total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}
