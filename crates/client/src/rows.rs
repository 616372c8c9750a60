//! Row DTOs for the hosted backend's tables.
//!
//! Column names follow the remote schema (`budget`, `purchases`,
//! `user_details`). Date columns are stored inconsistently upstream,
//! sometimes as ISO instants and sometimes as bare calendar dates; both
//! forms are accepted and normalized to a calendar date at ingestion so
//! period-boundary comparisons are always date-only. Null monetary
//! columns are treated as zero.

use chrono::{DateTime, NaiveDate};
use mammon_core::period::{NewPayPeriod, PayPeriod, PayPeriodPatch};
use mammon_core::profile::{NewUserProfile, UserProfile, UserProfilePatch};
use mammon_core::purchase::{NewPurchase, Purchase};
use mammon_shared::types::{PeriodId, PurchaseId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Parses a remote date column: RFC 3339 instant or bare `YYYY-MM-DD`.
pub(crate) fn parse_flexible_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("unrecognized date: {raw}"))
}

fn de_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible_date(&raw).map_err(serde::de::Error::custom)
}

/// A row of the `budget` table.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetRow {
    /// Server-assigned period identifier.
    pub payperiod_id: PeriodId,
    /// Owning user.
    pub user_id: UserId,
    /// Period start, instant or bare date.
    #[serde(deserialize_with = "de_flexible_date")]
    pub payperiod_start: NaiveDate,
    /// Period end, instant or bare date.
    #[serde(deserialize_with = "de_flexible_date")]
    pub payperiod_end: NaiveDate,
    /// Spending limit; null means unset.
    #[serde(default)]
    pub budgetlimit: Option<Decimal>,
    /// Savings goal; null means unset.
    #[serde(default)]
    pub savingsgoal: Option<Decimal>,
    /// Set-aside amount; null means unset.
    #[serde(default)]
    pub setaside: Option<Decimal>,
    /// Running balance column; not reliably maintained upstream.
    #[serde(default)]
    pub budgetbalance: Option<Decimal>,
}

impl From<BudgetRow> for PayPeriod {
    fn from(row: BudgetRow) -> Self {
        Self {
            id: row.payperiod_id,
            user_id: row.user_id,
            start_date: row.payperiod_start,
            end_date: row.payperiod_end,
            limit: row.budgetlimit.unwrap_or_default(),
            savings_goal: row.savingsgoal.unwrap_or_default(),
            set_aside: row.setaside.unwrap_or_default(),
            stored_balance: row.budgetbalance,
        }
    }
}

/// Insert payload for the `budget` table.
#[derive(Debug, Clone, Serialize)]
pub struct NewBudgetRow {
    /// Owning user.
    pub user_id: UserId,
    /// Period start as a bare date.
    pub payperiod_start: NaiveDate,
    /// Period end as a bare date.
    pub payperiod_end: NaiveDate,
    /// Spending limit.
    pub budgetlimit: Decimal,
    /// Savings goal.
    pub savingsgoal: Decimal,
    /// Set-aside amount.
    pub setaside: Decimal,
    /// Running balance column, initialized to zero as the forms do.
    pub budgetbalance: Decimal,
}

impl From<NewPayPeriod> for NewBudgetRow {
    fn from(period: NewPayPeriod) -> Self {
        Self {
            user_id: period.user_id,
            payperiod_start: period.start_date,
            payperiod_end: period.end_date,
            budgetlimit: period.limit,
            savingsgoal: period.savings_goal,
            setaside: period.set_aside,
            budgetbalance: Decimal::ZERO,
        }
    }
}

/// Partial update payload for the `budget` table.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPatchRow {
    /// New period start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payperiod_start: Option<NaiveDate>,
    /// New period end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payperiod_end: Option<NaiveDate>,
    /// New spending limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budgetlimit: Option<Decimal>,
    /// New savings goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savingsgoal: Option<Decimal>,
    /// New set-aside amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setaside: Option<Decimal>,
}

impl From<PayPeriodPatch> for BudgetPatchRow {
    fn from(patch: PayPeriodPatch) -> Self {
        Self {
            payperiod_start: patch.start_date,
            payperiod_end: patch.end_date,
            budgetlimit: patch.limit,
            savingsgoal: patch.savings_goal,
            setaside: patch.set_aside,
        }
    }
}

/// A row of the `purchases` table.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRow {
    /// Server-assigned purchase identifier.
    pub purchase_id: PurchaseId,
    /// Owning user.
    pub user_id: UserId,
    /// Covering pay period, when recorded.
    #[serde(default)]
    pub payperiod_id: Option<PeriodId>,
    /// Purchase date, instant or bare date.
    #[serde(deserialize_with = "de_flexible_date")]
    pub purchasedate: NaiveDate,
    /// Expense amount; null means zero.
    #[serde(default)]
    pub expense: Option<Decimal>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<PurchaseRow> for Purchase {
    fn from(row: PurchaseRow) -> Self {
        Self {
            id: row.purchase_id,
            user_id: row.user_id,
            period_id: row.payperiod_id,
            date: row.purchasedate,
            expense: row.expense.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
        }
    }
}

/// Insert payload for the `purchases` table.
#[derive(Debug, Clone, Serialize)]
pub struct NewPurchaseRow {
    /// Owning user.
    pub user_id: UserId,
    /// Covering pay period, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payperiod_id: Option<PeriodId>,
    /// Purchase date as a bare date.
    pub purchasedate: NaiveDate,
    /// Expense amount.
    pub expense: Decimal,
    /// Free-text description.
    pub description: String,
}

impl From<NewPurchase> for NewPurchaseRow {
    fn from(purchase: NewPurchase) -> Self {
        Self {
            user_id: purchase.user_id,
            payperiod_id: purchase.period_id,
            purchasedate: purchase.date,
            expense: purchase.expense,
            description: purchase.description,
        }
    }
}

/// A row of the `user_details` table.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRow {
    /// User identifier shared with auth.
    pub user_id: UserId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth, instant or bare date.
    #[serde(deserialize_with = "de_flexible_date")]
    pub date_of_birth: NaiveDate,
    /// Email address.
    pub email: String,
    /// Flat monthly cap; only present in one schema variant.
    #[serde(default)]
    pub budget: Option<Decimal>,
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
            email: row.email,
            budget: row.budget,
        }
    }
}

/// Insert payload for the `user_details` table.
#[derive(Debug, Clone, Serialize)]
pub struct NewUserRow {
    /// User identifier from the auth sign-up.
    pub user_id: UserId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth as a bare date.
    pub date_of_birth: NaiveDate,
    /// Email address.
    pub email: String,
}

impl NewUserRow {
    /// Binds sign-up profile details to the newly assigned user id.
    #[must_use]
    pub fn from_details(user_id: UserId, details: NewUserProfile) -> Self {
        Self {
            user_id,
            first_name: details.first_name,
            last_name: details.last_name,
            date_of_birth: details.date_of_birth,
            email: details.email,
        }
    }
}

/// Partial update payload for the `user_details` table.
#[derive(Debug, Clone, Serialize)]
pub struct UserPatchRow {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New flat spending cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

impl From<UserProfilePatch> for UserPatchRow {
    fn from(patch: UserProfilePatch) -> Self {
        Self {
            first_name: patch.first_name,
            last_name: patch.last_name,
            email: patch.email,
            budget: patch.budget,
        }
    }
}
