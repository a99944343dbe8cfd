//! Expense record model
//!
//! Represents a single categorized expense belonging to one profile (or to
//! the in-memory guest ledger).

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt;

use super::money::Money;

/// Store serialization format for expense timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown in reports for a timestamp that cannot be parsed
pub const INVALID_DATE_LABEL: &str = "Invalid date";

/// The two allowed expense kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseKind {
    /// Day-to-day necessity (rent, groceries, transport)
    Essential,
    /// Everything else
    NonEssential,
}

impl ExpenseKind {
    /// Parse kind text, tolerant of case and surrounding whitespace
    ///
    /// Serves both stored rows and caller-typed text: anything whose
    /// trimmed lowercase form is not exactly "essential" or
    /// "non-essential" is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "essential" => Some(Self::Essential),
            "non-essential" => Some(Self::NonEssential),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Essential => write!(f, "Essential"),
            Self::NonEssential => write!(f, "Non-Essential"),
        }
    }
}

/// Timestamp of an expense entry
///
/// Stored rows may carry timestamp text this program never wrote. Such a
/// row still scans, still counts toward totals and category/type filters,
/// and renders as "Invalid date" in reports; only date-range filtering
/// skips it. The raw text is preserved exactly so rewrites of unrelated
/// rows never alter it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryTimestamp {
    /// A well-formed "YYYY-MM-DD HH:MM:SS" timestamp
    Parsed(NaiveDateTime),
    /// Stored text that did not parse, kept verbatim
    Raw(String),
}

impl EntryTimestamp {
    /// Timestamp for a record created right now (local time)
    pub fn now() -> Self {
        Self::Parsed(Local::now().naive_local())
    }

    /// Parse stored timestamp text; unparsable text is kept raw, never an error
    pub fn parse(s: &str) -> Self {
        match NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
            Ok(dt) => Self::Parsed(dt),
            Err(_) => Self::Raw(s.to_string()),
        }
    }

    /// The calendar date component, if the timestamp parsed
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed(dt) => Some(dt.date()),
            Self::Raw(_) => None,
        }
    }

    /// Date formatted YYYY-MM-DD for reports, or the invalid-date placeholder
    pub fn report_date(&self) -> String {
        match self.date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => INVALID_DATE_LABEL.to_string(),
        }
    }
}

impl fmt::Display for EntryTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(dt) => write!(f, "{}", dt.format(TIMESTAMP_FORMAT)),
            Self::Raw(s) => write!(f, "{}", s),
        }
    }
}

/// A single recorded expense
///
/// Never mutated in place; removed only by bulk reset or account deletion.
#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    /// Profile name this expense belongs to (or the guest marker)
    pub owner: String,

    /// When the expense was recorded
    pub timestamp: EntryTimestamp,

    /// Free-text category label (e.g., "Food")
    pub category: String,

    /// Free-text description (e.g., "Lunch")
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Essential or Non-Essential
    pub kind: ExpenseKind,
}

impl ExpenseRecord {
    /// Create a record stamped with the current local time
    pub fn new(
        owner: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        kind: ExpenseKind,
    ) -> Self {
        Self {
            owner: owner.into(),
            timestamp: EntryTimestamp::now(),
            category: category.into(),
            description: description.into(),
            amount,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_kind_parse_canonical() {
        assert_eq!(ExpenseKind::parse("Essential"), Some(ExpenseKind::Essential));
        assert_eq!(
            ExpenseKind::parse("Non-Essential"),
            Some(ExpenseKind::NonEssential)
        );
    }

    #[test]
    fn test_kind_parse_is_case_and_whitespace_tolerant() {
        assert_eq!(ExpenseKind::parse(" essential "), Some(ExpenseKind::Essential));
        assert_eq!(ExpenseKind::parse("ESSENTIAL"), Some(ExpenseKind::Essential));
        assert_eq!(
            ExpenseKind::parse("non-essential"),
            Some(ExpenseKind::NonEssential)
        );
        assert_eq!(
            ExpenseKind::parse("NON-ESSENTIAL"),
            Some(ExpenseKind::NonEssential)
        );
    }

    #[test]
    fn test_kind_parse_rejects_other_text() {
        assert_eq!(ExpenseKind::parse("luxury"), None);
        assert_eq!(ExpenseKind::parse("non essential"), None);
        assert_eq!(ExpenseKind::parse(""), None);
    }

    #[test]
    fn test_kind_display_matches_store_text() {
        assert_eq!(ExpenseKind::Essential.to_string(), "Essential");
        assert_eq!(ExpenseKind::NonEssential.to_string(), "Non-Essential");
    }

    #[test]
    fn test_timestamp_parse_well_formed() {
        let ts = EntryTimestamp::parse("2025-03-14 09:26:53");
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(ts.to_string(), "2025-03-14 09:26:53");
        assert_eq!(ts.report_date(), "2025-03-14");
    }

    #[test]
    fn test_timestamp_keeps_raw_text() {
        let ts = EntryTimestamp::parse("yesterday-ish");
        assert_eq!(ts.date(), None);
        assert_eq!(ts.to_string(), "yesterday-ish");
        assert_eq!(ts.report_date(), INVALID_DATE_LABEL);
    }

    #[test]
    fn test_timestamp_date_only_text_is_raw() {
        // A bare date has no time component, so it does not match the store format
        let ts = EntryTimestamp::parse("2025-03-14");
        assert_eq!(ts.date(), None);
    }

    #[test]
    fn test_record_new_carries_parsed_timestamp() {
        let record = ExpenseRecord::new(
            "alice",
            "Food",
            "Lunch",
            Money::from_cents(1250),
            ExpenseKind::Essential,
        );
        assert!(record.timestamp.date().is_some());
        assert_eq!(record.owner, "alice");
    }
}
