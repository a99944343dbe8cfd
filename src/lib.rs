//! fintrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack
//! application: profile authentication against a flat credential store,
//! income and expense recording, and filtered textual expense reports
//! with budget feedback.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, profiles, sessions)
//! - `crypto`: Password digest for the credential store
//! - `storage`: Flat-file CSV storage layer
//! - `services`: Business logic layer
//! - `query`: Pure record filters and totals
//! - `reports`: Budget summary and expense report shaping
//! - `display`: Terminal table rendering
//! - `menu`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FintrackPaths, settings::Settings};
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
