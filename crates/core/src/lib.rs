//! Core business logic for Mammon.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations
//! live here; the remote ledger service is reached only through the
//! injected [`store::LedgerStore`] trait.
//!
//! # Modules
//!
//! - `period` - Pay-period resolution and remaining-balance math
//! - `purchase` - Logged expenses and category extraction
//! - `profile` - User profile data
//! - `reports` - Calendar/weekly/category overview computations
//! - `store` - Ledger accessor trait plus an in-memory implementation
//! - `refresh` - Stale-fetch generation guard for screen-level callers

pub mod period;
pub mod profile;
pub mod purchase;
pub mod refresh;
pub mod reports;
pub mod store;
