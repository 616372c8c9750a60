//! Purchase data types.

use chrono::NaiveDate;
use mammon_shared::types::{PeriodId, PurchaseId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::extract_category;

/// A single logged expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    /// Unique identifier (assigned by the remote store on creation).
    pub id: PurchaseId,
    /// Owning user.
    pub user_id: UserId,
    /// Pay period the purchase was logged against, when one covered it.
    pub period_id: Option<PeriodId>,
    /// Calendar date of the purchase. No time-of-day is stored.
    pub date: NaiveDate,
    /// Expense amount.
    pub expense: Decimal,
    /// Free-text description, by convention `"<text> (<category>)"`.
    pub description: String,
}

impl Purchase {
    /// Category label parsed from the description.
    #[must_use]
    pub fn category(&self) -> &str {
        extract_category(&self.description)
    }
}

/// Payload for logging a purchase. The store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPurchase {
    /// Owning user.
    pub user_id: UserId,
    /// Covering pay period, if known at submit time.
    pub period_id: Option<PeriodId>,
    /// Calendar date of the purchase.
    pub date: NaiveDate,
    /// Expense amount.
    pub expense: Decimal,
    /// Free-text description.
    pub description: String,
}
