//! Pay-period data types.

use chrono::NaiveDate;
use mammon_shared::types::{PeriodId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user-defined budget period.
///
/// Date comparisons are date-only: a period covers every calendar day
/// from `start_date` through `end_date`, both inclusive. Raw instant
/// comparison is deliberately avoided so that expenses logged late on
/// the final day are never excluded by a timezone boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Unique identifier (assigned by the remote store on creation).
    pub id: PeriodId,
    /// Owning user.
    pub user_id: UserId,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Spending limit for the period.
    pub limit: Decimal,
    /// Amount the user intends to save this period.
    pub savings_goal: Decimal,
    /// Amount earmarked within the limit, excluded from discretionary
    /// spending.
    pub set_aside: Decimal,
    /// Running balance column carried by the store. Not reliably
    /// maintained there, so it is never used in balance math.
    pub stored_balance: Option<Decimal>,
}

impl PayPeriod {
    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if this period ended strictly before the given date.
    #[must_use]
    pub fn ended_before(&self, date: NaiveDate) -> bool {
        self.end_date < date
    }

    /// Remaining spendable balance given the period's expense total.
    ///
    /// `limit - savings_goal - set_aside - total_expenses`. The result
    /// may be negative; stored data is not re-validated here.
    #[must_use]
    pub fn remaining_balance(&self, total_expenses: Decimal) -> Decimal {
        self.limit - self.savings_goal - self.set_aside - total_expenses
    }
}

/// Payload for creating a pay period. The store assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayPeriod {
    /// Owning user.
    pub user_id: UserId,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Spending limit for the period.
    pub limit: Decimal,
    /// Savings goal.
    pub savings_goal: Decimal,
    /// Set-aside amount.
    pub set_aside: Decimal,
}

/// Partial update for an existing pay period.
///
/// `None` fields are left unchanged by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayPeriodPatch {
    /// New first day.
    pub start_date: Option<NaiveDate>,
    /// New last day.
    pub end_date: Option<NaiveDate>,
    /// New spending limit.
    pub limit: Option<Decimal>,
    /// New savings goal.
    pub savings_goal: Option<Decimal>,
    /// New set-aside amount.
    pub set_aside: Option<Decimal>,
}
