//! Expense report submenu
//!
//! Collects filter input, runs the query, and prints either an ASCII
//! grid or the matching no-records message. Bad filter input never
//! leaves this module; it is printed and the submenu re-prompts.

use crate::config::Settings;
use crate::display::format_expense_report;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseKind, ExpenseRecord, Session};
use crate::query;
use crate::reports::{ExpenseReport, Projection};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::prompts::prompt_string;

/// The report generation submenu
pub struct ReportMenu<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ReportMenu<'a> {
    /// Create a new report submenu
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Run the submenu until the user returns to the main menu
    pub fn run(&self, session: &Session) -> FintrackResult<()> {
        loop {
            println!("---Expense Generator---");
            println!("1. View expenses by category");
            println!("2. View expenses by date range");
            println!("3. View expenses by type (Essential or Non-Essential)");
            println!("4. View all expenses.");
            println!("5. Return to Main Menu");

            let choice = prompt_string("Enter your choice: ")?;
            let choice: u32 = match choice.parse() {
                Ok(n) => n,
                Err(_) => {
                    println!("Please enter a valid option.");
                    continue;
                }
            };

            match choice {
                1 => self.by_category(session)?,
                2 => self.by_date_range(session)?,
                3 => self.by_kind(session)?,
                4 => self.all_expenses(session)?,
                5 => {
                    println!("Returning to Main Menu...");
                    return Ok(());
                }
                _ => {
                    println!("Invalid choice. Please enter a number between 1 and 5.");
                    continue;
                }
            }

            loop {
                let again = prompt_string("\nWould you like to view another report? (y/n): ")?;
                match again.to_lowercase().as_str() {
                    "y" => break,
                    "n" => {
                        println!("Returning to Main Menu...");
                        return Ok(());
                    }
                    _ => {
                        println!("Invalid input. Please enter 'y' for yes or 'n' for no.");
                    }
                }
            }
        }
    }

    fn by_category(&self, session: &Session) -> FintrackResult<()> {
        let category = prompt_string("Enter the category to filter by: ")?;

        println!();
        println!("--- Expenses in Category: {} ---", category);

        let records = self.visible_records(session)?;
        let matches = query::filter_by_category(&records, &category);
        let report = ExpenseReport::project(
            &matches,
            Projection::Category,
            &self.settings.currency_symbol,
        );
        if report.is_empty() {
            println!("No expenses recorded in category '{}'.", category);
        } else {
            println!("{}", format_expense_report(&report));
        }
        Ok(())
    }

    fn by_date_range(&self, session: &Session) -> FintrackResult<()> {
        let start_year = prompt_string("Enter start year(YYYY): ")?;
        let start_month = prompt_string("Enter start month(MM): ")?;
        let start_day = prompt_string("Enter start day(DD): ")?;
        let start_date = format!("{}-{}-{}", start_year, start_month, start_day);

        let end_year = prompt_string("Enter end year(YYYY): ")?;
        let end_month = prompt_string("Enter end month(MM): ")?;
        let end_day = prompt_string("Enter end day(DD): ")?;
        let end_date = format!("{}-{}-{}", end_year, end_month, end_day);

        println!();
        println!("--- Expenses from {} to {} ---", start_date, end_date);

        let records = self.visible_records(session)?;
        let matches = match query::filter_by_date_range(&records, &start_date, &end_date) {
            Ok(matches) => matches,
            Err(FintrackError::InvalidDateFormat(_)) => {
                println!("Please enter dates in the correct format: YYYY-MM-DD");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let report =
            ExpenseReport::project(&matches, Projection::Full, &self.settings.currency_symbol);
        if report.is_empty() {
            println!("No expenses recorded in this date range.");
        } else {
            println!("{}", format_expense_report(&report));
        }
        Ok(())
    }

    fn by_kind(&self, session: &Session) -> FintrackResult<()> {
        let type_text =
            prompt_string("Enter 'Essential' or 'Non-Essential' to filter by type: ")?;

        println!();
        match ExpenseKind::parse(&type_text) {
            Some(kind) => {
                println!("--- {} Expenses ---", kind);
                let records = self.visible_records(session)?;
                let matches = query::filter_by_type(&records, kind);
                let report = ExpenseReport::project(
                    &matches,
                    Projection::Full,
                    &self.settings.currency_symbol,
                );
                if report.is_empty() {
                    println!("No {} expenses recorded.", kind.to_string().to_lowercase());
                } else {
                    println!("{}", format_expense_report(&report));
                }
            }
            None => {
                // Free text that names no known kind can never match a row
                println!("--- {} Expenses ---", type_text);
                println!("No {} expenses recorded.", type_text.to_lowercase());
            }
        }
        Ok(())
    }

    fn all_expenses(&self, session: &Session) -> FintrackResult<()> {
        println!();
        println!("--- All Expenses ---");

        let records = self.visible_records(session)?;
        let report =
            ExpenseReport::project(&records, Projection::Full, &self.settings.currency_symbol);
        if report.is_empty() {
            println!("No expenses recorded yet.");
        } else {
            println!("{}", format_expense_report(&report));
        }
        Ok(())
    }

    fn visible_records(&self, session: &Session) -> FintrackResult<Vec<ExpenseRecord>> {
        ExpenseService::new(self.storage).list(session)
    }
}
