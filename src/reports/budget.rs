//! Budget summary
//!
//! Income against total spending for the active session, with a
//! spending-habit verdict attached.

use crate::error::FintrackResult;
use crate::models::{Money, Session};
use crate::reports::advisor;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Budget summary for the active session
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    /// Declared income
    pub income: Money,
    /// Sum of every recorded expense, including rows with unreadable dates
    pub total_expenses: Money,
    /// Income minus expenses (negative when overspent)
    pub remaining: Money,
    /// Spending-habit verdict
    pub feedback: &'static str,
}

impl BudgetSummary {
    /// Generate a summary from the session's income and visible expenses
    pub fn generate(storage: &Storage, session: &Session) -> FintrackResult<Self> {
        let expenses = ExpenseService::new(storage);
        let total_expenses = expenses.total(session)?;
        Ok(Self::from_parts(session.income(), total_expenses))
    }

    /// Build a summary from already-known figures
    pub fn from_parts(income: Money, total_expenses: Money) -> Self {
        Self {
            income,
            total_expenses,
            remaining: income - total_expenses,
            feedback: advisor::feedback(total_expenses, income),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("------Budget Summary------\n");
        output.push_str(&format!(
            "Income: {}\n",
            self.income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Remaining Budget: {}\n",
            self.remaining.format_with_symbol(currency_symbol)
        ));
        output.push_str(self.feedback);
        output.push('\n');

        output
    }
}
