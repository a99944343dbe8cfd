//! Expense service
//!
//! Routes expense reads and writes by session kind: authenticated
//! profiles hit the durable store, guests stay in memory for the life
//! of the session.

use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseKind, ExpenseRecord, Money, Session, GUEST_OWNER};
use crate::query;
use crate::storage::Storage;

/// Service for recording and reading expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record one expense for the active session
    pub fn add(
        &self,
        session: &mut Session,
        category: &str,
        description: &str,
        amount: Money,
        kind: ExpenseKind,
    ) -> FintrackResult<ExpenseRecord> {
        if amount.is_negative() {
            return Err(FintrackError::Validation(
                "Expense amount cannot be negative".into(),
            ));
        }

        match session {
            Session::User(profile) => {
                let record =
                    ExpenseRecord::new(profile.name.clone(), category, description, amount, kind);
                self.storage.expenses.append(&record)?;
                Ok(record)
            }
            Session::Guest(state) => {
                let record = ExpenseRecord::new(GUEST_OWNER, category, description, amount, kind);
                state.expenses.push(record.clone());
                info!(
                    "Guest expense recorded in memory: {} ({})",
                    record.amount, record.category
                );
                Ok(record)
            }
        }
    }

    /// All expenses visible to the session, in append order
    pub fn list(&self, session: &Session) -> FintrackResult<Vec<ExpenseRecord>> {
        match session {
            Session::User(profile) => self.storage.expenses.scan(&profile.name),
            Session::Guest(state) => Ok(state.expenses.clone()),
        }
    }

    /// Sum of every expense visible to the session
    pub fn total(&self, session: &Session) -> FintrackResult<Money> {
        Ok(query::total(&self.list(session)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn user_session(name: &str) -> Session {
        Session::user(crate::models::UserProfile::new(name, "hash"))
    }

    #[test]
    fn test_add_for_user_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let mut session = user_session("alice");

        service
            .add(
                &mut session,
                "Groceries",
                "Weekly shop",
                Money::from_cents(8_000),
                ExpenseKind::Essential,
            )
            .unwrap();

        // Visible through a fresh scan of the durable store
        let stored = storage.expenses.scan("alice").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description, "Weekly shop");
        assert_eq!(stored[0].amount.cents(), 8_000);
    }

    #[test]
    fn test_add_for_guest_stays_in_memory() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let mut session = Session::guest();

        service
            .add(
                &mut session,
                "Travel",
                "Bus fare",
                Money::from_cents(250),
                ExpenseKind::Essential,
            )
            .unwrap();

        // Nothing reaches the store, and no expense file is created
        assert!(!storage.expenses.path().exists());
        assert_eq!(service.list(&session).unwrap().len(), 1);
        assert_eq!(service.list(&session).unwrap()[0].owner, GUEST_OWNER);
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let mut session = user_session("alice");

        let result = service.add(
            &mut session,
            "Oops",
            "Refund",
            Money::from_cents(-100),
            ExpenseKind::Essential,
        );
        assert!(matches!(result, Err(FintrackError::Validation(_))));
    }

    #[test]
    fn test_list_is_scoped_to_the_session_owner() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let mut alice = user_session("alice");
        let mut bob = user_session("bob");
        service
            .add(
                &mut alice,
                "Food",
                "Lunch",
                Money::from_cents(1_000),
                ExpenseKind::Essential,
            )
            .unwrap();
        service
            .add(
                &mut bob,
                "Food",
                "Dinner",
                Money::from_cents(2_000),
                ExpenseKind::Essential,
            )
            .unwrap();

        let listed = service.list(&alice).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "Lunch");
    }

    #[test]
    fn test_total_sums_all_visible_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let mut session = user_session("alice");

        service
            .add(
                &mut session,
                "Groceries",
                "Weekly shop",
                Money::from_cents(8_000),
                ExpenseKind::Essential,
            )
            .unwrap();
        service
            .add(
                &mut session,
                "Dining",
                "Takeaway",
                Money::from_cents(1_250),
                ExpenseKind::NonEssential,
            )
            .unwrap();

        assert_eq!(service.total(&session).unwrap().cents(), 9_250);
    }

    #[test]
    fn test_total_for_empty_session_is_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.total(&Session::guest()).unwrap().is_zero());
        assert!(service.total(&user_session("nobody")).unwrap().is_zero());
    }
}
