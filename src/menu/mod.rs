//! Interactive menu
//!
//! The menu layer owns all terminal interaction: it collects and
//! validates input, calls into the service layer, and prints results.
//! Recoverable failures (bad login, duplicate signup, malformed dates)
//! are printed and re-prompted here, never propagated upward.

pub mod prompts;
pub mod report;

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Session;
use crate::reports::BudgetSummary;
use crate::services::{AccountService, AuthService, ExpenseService};
use crate::storage::Storage;

use prompts::{prompt_kind, prompt_money, prompt_password, prompt_string};
use report::ReportMenu;

/// The interactive menu loop
pub struct Menu<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> Menu<'a> {
    /// Create a new menu over the given storage and settings
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Run the program: setup menu, then the main menu until exit
    pub fn run(&self) -> FintrackResult<()> {
        println!("Welcome to Personal Finance Tracker");
        let mut session = self.setup_menu()?;
        self.main_menu(&mut session)
    }

    /// Login, create profile, or continue as guest
    fn setup_menu(&self) -> FintrackResult<Session> {
        let auth = AuthService::new(self.storage);

        loop {
            println!("1. Login");
            println!("2. Create Profile");
            println!("3. Continue as a guest");

            let choice = prompt_string("Choose an option: ")?;
            match choice.as_str() {
                "1" => {
                    let name = prompt_string("Enter your name: ")?;
                    let password = prompt_password("Enter your password: ")?;
                    match auth.login(&name, &password) {
                        Ok(session) => {
                            println!("Welcome back {}!", session.owner_name());
                            return Ok(session);
                        }
                        Err(err) if err.is_auth_failed() => {
                            println!("Login failed. Please try again.");
                        }
                        Err(err) => return Err(err),
                    }
                }
                "2" => {
                    let name = prompt_string("Enter your name: ")?;
                    let password = prompt_password("Enter your password: ")?;
                    match auth.sign_up(&name, &password) {
                        Ok(session) => {
                            println!("{}, your profile is created!", session.owner_name());
                            return Ok(session);
                        }
                        Err(FintrackError::AlreadyExists(_)) => {
                            println!("Username already exists. Try again.");
                        }
                        Err(FintrackError::Validation(reason)) => {
                            println!("{}", reason);
                        }
                        Err(err) => return Err(err),
                    }
                }
                "3" => return Ok(Session::guest()),
                _ => println!("Please enter a valid option."),
            }
        }
    }

    /// The main menu loop; returns when the user chooses to exit
    fn main_menu(&self, session: &mut Session) -> FintrackResult<()> {
        loop {
            println!();
            println!("Main Menu");
            println!("1. Enter Income");
            println!("2. Add Expense");
            println!("3. View Budget Summary");
            println!("4. Generate Expense Report");
            if session.is_authenticated() {
                println!("5. Delete Account");
                println!("6. Exit");
            } else {
                println!("5. Exit");
            }

            let choice = prompt_string("Enter your choice: ")?;
            let choice: u32 = match choice.parse() {
                Ok(n) => n,
                Err(_) => {
                    println!("Invalid input. Please enter a number corresponding to your choice.");
                    continue;
                }
            };

            match choice {
                1 => self.enter_income(session)?,
                2 => self.add_expense(session)?,
                3 => self.budget_summary(session)?,
                4 => ReportMenu::new(self.storage, self.settings).run(session)?,
                5 if session.is_authenticated() => {
                    self.delete_account(session)?;
                    println!("Goodbye!");
                    return Ok(());
                }
                // Guests exit on 5; 6 exits in both modes
                5 | 6 => {
                    println!("Goodbye!");
                    return Ok(());
                }
                _ => println!("Please enter a valid option."),
            }
        }
    }

    fn enter_income(&self, session: &mut Session) -> FintrackResult<()> {
        let income = prompt_money("Enter your monthly income: ")?;
        AccountService::new(self.storage).update_income(session, income)?;
        println!("Your current income is {}", session.income());
        Ok(())
    }

    fn add_expense(&self, session: &mut Session) -> FintrackResult<()> {
        let category = prompt_string("Enter the category for this expense: ")?;
        let description = prompt_string("Enter a description for this expense: ")?;
        let amount = prompt_money("Enter the amount: ")?;
        let kind = prompt_kind()?;

        let record = ExpenseService::new(self.storage).add(
            session,
            &category,
            &description,
            amount,
            kind,
        )?;
        println!(
            "Expense added: {}, {}, {}, {}.",
            record.category,
            record.description,
            record
                .amount
                .format_with_symbol(&self.settings.currency_symbol),
            record.kind
        );
        Ok(())
    }

    fn budget_summary(&self, session: &mut Session) -> FintrackResult<()> {
        let summary = BudgetSummary::generate(self.storage, session)?;
        println!();
        print!(
            "{}",
            summary.format_terminal(&self.settings.currency_symbol)
        );

        println!("1. Reset your account.");
        println!("2. Return to Main Menu.");

        let accounts = AccountService::new(self.storage);
        loop {
            let choice = prompt_string("Enter your choice: ")?;
            match choice.as_str() {
                "1" => {
                    accounts.reset_income(session)?;
                    accounts.reset_expenses(session)?;
                    println!("All expenses and income have been reset.");
                    return Ok(());
                }
                "2" => return Ok(()),
                _ => println!("Invalid choice. Please try again."),
            }
        }
    }

    fn delete_account(&self, session: &mut Session) -> FintrackResult<()> {
        AccountService::new(self.storage).delete_account(session)?;
        println!("Your account and all associated expenses have been deleted.");
        Ok(())
    }
}
