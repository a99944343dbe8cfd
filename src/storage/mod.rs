//! Storage layer for fintrack
//!
//! Flat CSV record stores with atomic rewrites and automatic directory
//! creation. Every mutation is a full read-then-overwrite of the affected
//! store; there is no locking, so concurrent processes rewriting the same
//! store are last-writer-wins.

pub mod credentials;
pub mod expenses;
pub mod record_io;

pub use credentials::CredentialStore;
pub use expenses::ExpenseStore;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    paths: FintrackPaths,
    pub credentials: CredentialStore,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            credentials: CredentialStore::new(paths.profiles_file()),
            expenses: ExpenseStore::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }
}
