//! Remote ledger service client for Mammon.
//!
//! Talks to the hosted backend over its REST query API and auth
//! endpoints. [`RemoteLedger`] implements the core
//! [`LedgerStore`](mammon_core::store::LedgerStore) trait, so everything
//! above this crate is unaware of the transport.
//!
//! Requests carry an explicit timeout (the hosted service defines
//! none); idempotent reads are retried at most once on transport
//! failure, writes never are.

pub mod auth;
pub mod rest;
pub mod rows;

mod retry;

pub use auth::{AuthClient, AuthSession, AuthUser};
pub use rest::RemoteLedger;
