//! Expense report projection
//!
//! Shapes an already-filtered record sequence into table rows. Rendering
//! the rows as a terminal grid lives in the display layer; this module
//! only decides what goes in each cell.

use crate::models::ExpenseRecord;

/// Which columns a report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// date, description, amount (the category is implied by the filter)
    Category,
    /// date, category, description, amount, type
    Full,
}

impl Projection {
    /// Column headers for this projection
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Category => &["Date", "Description", "Amount"],
            Self::Full => &["Date", "Category", "Description", "Amount", "Expense Type"],
        }
    }
}

/// A shaped expense report, ready for rendering
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    projection: Projection,
    rows: Vec<Vec<String>>,
}

impl ExpenseReport {
    /// Project records into row tuples, preserving input order
    ///
    /// Timestamps reduce to their YYYY-MM-DD date component, or the
    /// "Invalid date" placeholder when the stored text does not parse;
    /// one bad timestamp never fails the report. Amount cells carry the
    /// configured currency symbol.
    pub fn project(
        records: &[ExpenseRecord],
        projection: Projection,
        currency_symbol: &str,
    ) -> Self {
        let rows = records
            .iter()
            .map(|record| {
                let date = record.timestamp.report_date();
                let amount = record.amount.format_with_symbol(currency_symbol);
                match projection {
                    Projection::Category => vec![date, record.description.clone(), amount],
                    Projection::Full => vec![
                        date,
                        record.category.clone(),
                        record.description.clone(),
                        amount,
                        record.kind.to_string(),
                    ],
                }
            })
            .collect();

        Self { projection, rows }
    }

    /// The projection this report was shaped with
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Column headers matching the rows
    pub fn headers(&self) -> &'static [&'static str] {
        self.projection.headers()
    }

    /// The shaped rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// True when there is nothing to render
    ///
    /// Callers print a context-specific no-records message instead of an
    /// empty grid.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
