//! Display formatting for terminal output
//!
//! Provides utilities for formatting report data for terminal display.

pub mod table;

pub use table::format_expense_report;
