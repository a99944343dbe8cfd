//! Expense table rendering
//!
//! Turns a projected expense report into an ASCII grid. Empty reports
//! are the caller's problem: they print a context-specific no-records
//! message instead of asking for a grid.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::reports::ExpenseReport;

/// Render a projected report as an ASCII grid with a header row
pub fn format_expense_report(report: &ExpenseReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(report.headers().iter().copied());
    for row in report.rows() {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}
