//! Session model
//!
//! A session is either an authenticated profile or guest state, never both
//! and never neither. The session value is passed explicitly to every
//! operation that needs it; there is no ambient current-user state.

use super::expense::ExpenseRecord;
use super::money::Money;
use super::profile::UserProfile;

/// Owner name recorded for guest expenses. Signup rejects this name so a
/// registered profile can never collide with the marker.
pub const GUEST_OWNER: &str = "Guest";

/// In-memory state of an unauthenticated session
///
/// Nothing here is ever persisted; it is dropped when the session ends.
#[derive(Debug, Clone, Default)]
pub struct GuestState {
    /// Income entered during this session
    pub income: Money,

    /// Expenses recorded during this session
    pub expenses: Vec<ExpenseRecord>,
}

/// The active session
#[derive(Debug, Clone)]
pub enum Session {
    /// Logged in as a registered profile
    User(UserProfile),
    /// Unauthenticated, with session-scoped income and expenses
    Guest(GuestState),
}

impl Session {
    /// Start a fresh guest session
    pub fn guest() -> Self {
        Self::Guest(GuestState::default())
    }

    /// Start an authenticated session
    pub fn user(profile: UserProfile) -> Self {
        Self::User(profile)
    }

    /// Whether this session is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// The owner name expense records are tagged with
    pub fn owner_name(&self) -> &str {
        match self {
            Self::User(profile) => &profile.name,
            Self::Guest(_) => GUEST_OWNER,
        }
    }

    /// The session's current income
    pub fn income(&self) -> Money {
        match self {
            Self::User(profile) => profile.income,
            Self::Guest(guest) => guest.income,
        }
    }

    /// The authenticated profile, if any
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::User(profile) => Some(profile),
            Self::Guest(_) => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::guest()
    }
}
