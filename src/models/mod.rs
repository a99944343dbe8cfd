//! Core data models for fintrack
//!
//! This module contains the data structures that represent the tracking
//! domain: money amounts, user profiles, expense records, and the session.

pub mod expense;
pub mod money;
pub mod profile;
pub mod session;

pub use expense::{EntryTimestamp, ExpenseKind, ExpenseRecord, INVALID_DATE_LABEL, TIMESTAMP_FORMAT};
pub use money::{Money, MoneyParseError};
pub use profile::UserProfile;
pub use session::{GuestState, Session, GUEST_OWNER};
