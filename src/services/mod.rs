//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, session routing, and cross-store operations.

pub mod account;
pub mod auth;
pub mod expense;

pub use account::AccountService;
pub use auth::AuthService;
pub use expense::ExpenseService;
