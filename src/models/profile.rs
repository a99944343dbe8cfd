//! User profile model

use super::money::Money;

/// A registered user: identity, credential digest, and stored income
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique profile name (case-sensitive)
    pub name: String,

    /// SHA-256 hex digest of the password
    pub password_hash: String,

    /// Last successfully stored income
    pub income: Money,
}

impl UserProfile {
    /// Create a profile as registered at signup; income starts at zero
    pub fn new(name: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password_hash: password_hash.into(),
            income: Money::zero(),
        }
    }
}
