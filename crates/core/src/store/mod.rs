//! Accessor trait for the remote ledger service.
//!
//! The hosted backend is an external collaborator; everything in this
//! crate reaches it through this trait so the resolver and services can
//! be exercised against an in-memory implementation.

pub mod memory;

use chrono::NaiveDate;
use mammon_shared::AppResult;
use mammon_shared::types::{PeriodId, UserId};

use crate::period::{NewPayPeriod, PayPeriod, PayPeriodPatch};
use crate::profile::UserProfile;
use crate::purchase::{NewPurchase, Purchase};

pub use memory::InMemoryLedger;

/// Query operations consumed from the remote ledger service.
///
/// All listing operations are scoped to a single owning user; no record
/// is ever shared between users. Implementations surface transport
/// failures as [`mammon_shared::AppError::Unavailable`] so callers can
/// distinguish them from an empty result.
#[allow(async_fn_in_trait)] // consumed generically, never as dyn
pub trait LedgerStore {
    /// Lists all pay periods for a user, newest `start_date` first.
    async fn list_pay_periods(&self, user_id: UserId) -> AppResult<Vec<PayPeriod>>;

    /// Inserts a pay period; the store assigns the identifier.
    async fn insert_pay_period(&self, period: NewPayPeriod) -> AppResult<PayPeriod>;

    /// Applies a partial update to a pay period.
    async fn update_pay_period(
        &self,
        period_id: PeriodId,
        patch: PayPeriodPatch,
    ) -> AppResult<PayPeriod>;

    /// Lists all purchases for a user.
    async fn list_purchases(&self, user_id: UserId) -> AppResult<Vec<Purchase>>;

    /// Lists purchases dated within `[start, end]`, both bounds inclusive.
    async fn list_purchases_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Purchase>>;

    /// Inserts a purchase; the store assigns the identifier.
    async fn insert_purchase(&self, purchase: NewPurchase) -> AppResult<Purchase>;

    /// Fetches a user's profile, or `None` when none exists.
    async fn get_user_profile(&self, user_id: UserId) -> AppResult<Option<UserProfile>>;
}
