//! Authentication service
//!
//! Signup and login against the credential store. Passwords are hashed
//! before they reach storage; the plaintext never leaves this layer.

use crate::crypto::hash_password;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Session, GUEST_OWNER};
use crate::storage::Storage;

/// Service for profile signup and login
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new profile and return an authenticated session
    ///
    /// The new profile starts with zero income and is logged in
    /// immediately; no separate login step follows signup.
    pub fn sign_up(&self, name: &str, password: &str) -> FintrackResult<Session> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FintrackError::Validation(
                "Profile name cannot be empty".into(),
            ));
        }
        // The guest owner name is reserved; a profile under it would
        // collide with guest-scoped expense rows.
        if name == GUEST_OWNER {
            return Err(FintrackError::Validation(format!(
                "'{}' is reserved for guest sessions",
                GUEST_OWNER
            )));
        }

        let profile = self
            .storage
            .credentials
            .create(name, &hash_password(password))?;

        Ok(Session::user(profile))
    }

    /// Authenticate against stored credentials
    ///
    /// An unknown name and a wrong password both fail with the same
    /// error; the caller cannot tell them apart.
    pub fn login(&self, name: &str, password: &str) -> FintrackResult<Session> {
        let profile = self
            .storage
            .credentials
            .authenticate(name.trim(), &hash_password(password))?;

        Ok(Session::user(profile))
    }
}
