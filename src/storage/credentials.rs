//! Credential store
//!
//! One profile per row in `user_list.csv`: name, password hash, income.
//! Reads parse rows into [`UserProfile`] values and skip anything
//! malformed with a diagnostic. Mutations work on raw rows so every row
//! that is not the target, well-formed or not, is written back exactly
//! as it was read.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{info, warn};

use super::record_io;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, UserProfile};

const FIELD_NAME: usize = 0;
const FIELD_HASH: usize = 1;
const FIELD_INCOME: usize = 2;
const PROFILE_FIELDS: usize = 3;

/// Flat-file store of registered profiles
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a profile with this exact name is registered
    pub fn exists(&self, name: &str) -> FintrackResult<bool> {
        Ok(self.load_profiles()?.iter().any(|p| p.name == name))
    }

    /// Register a new profile with income zero
    ///
    /// Fails with [`FintrackError::AlreadyExists`] if the name is taken.
    pub fn create(&self, name: &str, password_hash: &str) -> FintrackResult<UserProfile> {
        if self.exists(name)? {
            return Err(FintrackError::AlreadyExists(name.to_string()));
        }

        let profile = UserProfile::new(name, password_hash);
        record_io::append_record(
            &self.path,
            [
                profile.name.as_str(),
                profile.password_hash.as_str(),
                &profile.income.to_string(),
            ],
        )?;

        info!("Created profile '{}'", name);
        Ok(profile)
    }

    /// Look up a profile by exact name and password hash match
    ///
    /// An unknown name and a wrong hash are indistinguishable: both return
    /// [`FintrackError::AuthFailed`].
    pub fn authenticate(&self, name: &str, password_hash: &str) -> FintrackResult<UserProfile> {
        let found = self
            .load_profiles()?
            .into_iter()
            .find(|p| p.name == name && p.password_hash == password_hash);

        match found {
            Some(profile) => Ok(profile),
            None => {
                warn!("Failed login attempt for '{}'", name);
                Err(FintrackError::AuthFailed)
            }
        }
    }

    /// Rewrite the store with the named profile's income replaced
    ///
    /// All other rows are written back unchanged in the order they were read.
    /// An unknown name rewrites the store identically; an absent store is
    /// written out empty.
    pub fn update_income(&self, name: &str, income: Money) -> FintrackResult<()> {
        let rows = record_io::read_raw_records(&self.path)?;

        let mut updated = Vec::with_capacity(rows.len());
        for row in rows {
            if row.get(FIELD_NAME) == Some(name) {
                match row.get(FIELD_HASH) {
                    Some(hash) => {
                        updated.push(StringRecord::from(vec![
                            name.to_string(),
                            hash.to_string(),
                            income.to_string(),
                        ]));
                    }
                    None => {
                        // Row matches the name but has no hash field to carry over
                        warn!(
                            "Leaving a malformed profile row for '{}' unchanged during income update",
                            name
                        );
                        updated.push(row);
                    }
                }
            } else {
                updated.push(row);
            }
        }

        record_io::rewrite_records_atomic(&self.path, &updated)?;
        info!("Income updated for '{}': {}", name, income);
        Ok(())
    }

    /// Rewrite the store omitting every row for this name
    ///
    /// Removing the profile's expenses is the caller's responsibility. An
    /// absent store is a no-op and stays absent.
    pub fn delete(&self, name: &str) -> FintrackResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let rows = record_io::read_raw_records(&self.path)?;
        let kept: Vec<StringRecord> = rows
            .into_iter()
            .filter(|row| row.get(FIELD_NAME) != Some(name))
            .collect();

        record_io::rewrite_records_atomic(&self.path, &kept)?;
        info!("Deleted profile '{}'", name);
        Ok(())
    }

    fn load_profiles(&self) -> FintrackResult<Vec<UserProfile>> {
        let rows = record_io::read_raw_records(&self.path)?;

        let mut profiles = Vec::with_capacity(rows.len());
        for row in rows {
            match parse_profile(&row) {
                Ok(profile) => profiles.push(profile),
                Err(reason) => {
                    warn!("Skipping a malformed profile row: {}", reason);
                }
            }
        }

        Ok(profiles)
    }
}

fn parse_profile(record: &StringRecord) -> Result<UserProfile, String> {
    if record.len() < PROFILE_FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            PROFILE_FIELDS,
            record.len()
        ));
    }

    let income = Money::parse(&record[FIELD_INCOME]).map_err(|e| e.to_string())?;

    Ok(UserProfile {
        name: record[FIELD_NAME].to_string(),
        password_hash: record[FIELD_HASH].to_string(),
        income,
    })
}
