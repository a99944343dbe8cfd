//! Reports module for fintrack
//!
//! Provides the budget summary, spending feedback bands, and the
//! expense report projections rendered by the display layer.

pub mod advisor;
pub mod budget;
pub mod expense_view;

pub use budget::BudgetSummary;
pub use expense_view::{ExpenseReport, Projection};
