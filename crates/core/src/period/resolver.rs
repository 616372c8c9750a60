//! Pay-period resolution and balance calculation.
//!
//! Selects the *current* and *previous* pay periods for a user at a
//! given date and computes each period's remaining spendable balance.
//! This is a pure read-and-compute component: it never mutates the
//! store, and calling it twice over unchanged backing data yields
//! identical results.

use chrono::{NaiveDate, Utc};
use mammon_shared::AppResult;
use mammon_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::store::LedgerStore;

use super::types::PayPeriod;

/// A resolved period slot together with its expense aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The period record as stored.
    pub period: PayPeriod,
    /// Sum of expenses dated within the period, bounds inclusive.
    pub total_expenses: Decimal,
    /// `limit - savings_goal - set_aside - total_expenses`.
    pub remaining_balance: Decimal,
}

/// Result of resolving a user's periods at a point in time.
///
/// An absent slot is an empty state, not an error: the UI renders a
/// zeroed view for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedPeriods {
    /// The period whose date range contains the resolution date.
    pub current: Option<PeriodSummary>,
    /// The most recently ended period that precedes the resolution date.
    pub previous: Option<PeriodSummary>,
}

/// Resolves current/previous pay periods against an injected store.
#[derive(Debug)]
pub struct PayPeriodResolver<S> {
    store: S,
}

impl<S: LedgerStore> PayPeriodResolver<S> {
    /// Creates a resolver over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the resolver, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Resolves the current and previous periods as of today (UTC).
    pub async fn resolve_now(&self, user_id: UserId) -> AppResult<ResolvedPeriods> {
        self.resolve(user_id, Utc::now().date_naive()).await
    }

    /// Resolves the current and previous periods as of `today`.
    ///
    /// Containment is date-only and inclusive on both ends, so an
    /// expense logged late on a period's final day still belongs to it.
    /// When overlapping periods both contain `today`, the one with the
    /// latest `start_date` wins; this is a documented policy for
    /// un-validated data, not a uniqueness invariant.
    ///
    /// # Errors
    ///
    /// Store failures propagate unchanged; an unreachable backend is
    /// never reported as "no periods".
    #[instrument(skip(self))]
    pub async fn resolve(&self, user_id: UserId, today: NaiveDate) -> AppResult<ResolvedPeriods> {
        let periods = self.store.list_pay_periods(user_id).await?;
        if periods.is_empty() {
            debug!("no pay periods on record");
            return Ok(ResolvedPeriods::default());
        }

        let current = select_current(&periods, today).cloned();
        let previous = select_previous(&periods, today).cloned();
        debug!(
            current = current.as_ref().map(|p| p.id.to_string()),
            previous = previous.as_ref().map(|p| p.id.to_string()),
            "periods selected"
        );

        let current = match current {
            Some(period) => Some(self.summarize(period).await?),
            None => None,
        };
        let previous = match previous {
            Some(period) => Some(self.summarize(period).await?),
            None => None,
        };

        Ok(ResolvedPeriods { current, previous })
    }

    async fn summarize(&self, period: PayPeriod) -> AppResult<PeriodSummary> {
        let purchases = self
            .store
            .list_purchases_in_range(period.user_id, period.start_date, period.end_date)
            .await?;
        let total_expenses: Decimal = purchases.iter().map(|p| p.expense).sum();
        let remaining_balance = period.remaining_balance(total_expenses);
        Ok(PeriodSummary {
            period,
            total_expenses,
            remaining_balance,
        })
    }
}

/// Picks the period covering `today`; latest `start_date` wins among
/// overlapping candidates, with `end_date` as a deterministic tie-break.
pub(crate) fn select_current(periods: &[PayPeriod], today: NaiveDate) -> Option<&PayPeriod> {
    periods
        .iter()
        .filter(|p| p.contains_date(today))
        .max_by_key(|p| (p.start_date, p.end_date))
}

/// Picks the most recently ended period strictly before `today`; latest
/// `end_date` wins, with `start_date` as a deterministic tie-break.
pub(crate) fn select_previous(periods: &[PayPeriod], today: NaiveDate) -> Option<&PayPeriod> {
    periods
        .iter()
        .filter(|p| p.ended_before(today))
        .max_by_key(|p| (p.end_date, p.start_date))
}
