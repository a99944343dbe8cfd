//! Account lifecycle service
//!
//! Income updates, resets, and account deletion. Each operation keeps
//! the in-memory session in step with the durable stores; guest
//! sessions only ever touch their own in-memory state.

use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Session};
use crate::storage::Storage;

/// Service for income and account lifecycle operations
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Store a new income figure for the active session
    pub fn update_income(&self, session: &mut Session, income: Money) -> FintrackResult<()> {
        if income.is_negative() {
            return Err(FintrackError::Validation(
                "Income cannot be negative".into(),
            ));
        }

        match session {
            Session::User(profile) => {
                self.storage
                    .credentials
                    .update_income(&profile.name, income)?;
                profile.income = income;
            }
            Session::Guest(state) => {
                state.income = income;
                info!("Guest income recorded: {}", income);
            }
        }

        Ok(())
    }

    /// Clear every expense visible to the session; income is untouched
    pub fn reset_expenses(&self, session: &mut Session) -> FintrackResult<()> {
        match session {
            Session::User(profile) => self.storage.expenses.delete_all(&profile.name),
            Session::Guest(state) => {
                state.expenses.clear();
                Ok(())
            }
        }
    }

    /// Zero the session's income; expenses are untouched
    pub fn reset_income(&self, session: &mut Session) -> FintrackResult<()> {
        self.update_income(session, Money::zero())
    }

    /// Delete the logged-in profile and every expense it owns
    ///
    /// Two independent store rewrites, not one atomic operation: a
    /// failure between them can leave expense rows without a profile.
    /// The session is reset to a fresh guest state on success.
    pub fn delete_account(&self, session: &mut Session) -> FintrackResult<()> {
        let name = match session {
            Session::User(profile) => profile.name.clone(),
            Session::Guest(_) => {
                return Err(FintrackError::Validation("No profile is logged in".into()))
            }
        };

        self.storage.credentials.delete(&name)?;
        self.storage.expenses.delete_all(&name)?;

        *session = Session::guest();
        info!("Account and expenses deleted for '{}'", name);
        Ok(())
    }
}
