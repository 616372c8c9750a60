//! In-memory ledger store for tests and offline use.

use std::sync::Mutex;

use chrono::NaiveDate;
use mammon_shared::types::{PeriodId, PurchaseId, UserId};
use mammon_shared::{AppError, AppResult};

use crate::period::{NewPayPeriod, PayPeriod, PayPeriodPatch};
use crate::profile::UserProfile;
use crate::purchase::{NewPurchase, Purchase};

use super::LedgerStore;

#[derive(Debug, Default)]
struct State {
    periods: Vec<PayPeriod>,
    purchases: Vec<Purchase>,
    profiles: Vec<UserProfile>,
    unavailable: bool,
}

/// A [`LedgerStore`] backed by process memory.
///
/// Mirrors the remote contract closely enough for resolver and service
/// tests: server-assigned identifiers, start-descending period listing,
/// inclusive date-range purchase queries. [`set_unavailable`] simulates
/// an unreachable backend.
///
/// [`set_unavailable`]: InMemoryLedger::set_unavailable
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: Mutex<State>,
}

impl InMemoryLedger {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail with `Unavailable` until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// Seeds a profile record.
    pub fn put_profile(&self, profile: UserProfile) {
        let mut state = self.lock();
        state.profiles.retain(|p| p.user_id != profile.user_id);
        state.profiles.push(profile);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A poisoned lock only happens after a panic in a test body.
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check_available(state: &State) -> AppResult<()> {
        if state.unavailable {
            return Err(AppError::Unavailable("in-memory store offline".into()));
        }
        Ok(())
    }
}

impl LedgerStore for InMemoryLedger {
    async fn list_pay_periods(&self, user_id: UserId) -> AppResult<Vec<PayPeriod>> {
        let state = self.lock();
        Self::check_available(&state)?;
        let mut periods: Vec<PayPeriod> = state
            .periods
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        periods.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(periods)
    }

    async fn insert_pay_period(&self, period: NewPayPeriod) -> AppResult<PayPeriod> {
        let mut state = self.lock();
        Self::check_available(&state)?;
        let stored = PayPeriod {
            id: PeriodId::new(),
            user_id: period.user_id,
            start_date: period.start_date,
            end_date: period.end_date,
            limit: period.limit,
            savings_goal: period.savings_goal,
            set_aside: period.set_aside,
            stored_balance: None,
        };
        state.periods.push(stored.clone());
        Ok(stored)
    }

    async fn update_pay_period(
        &self,
        period_id: PeriodId,
        patch: PayPeriodPatch,
    ) -> AppResult<PayPeriod> {
        let mut state = self.lock();
        Self::check_available(&state)?;
        let period = state
            .periods
            .iter_mut()
            .find(|p| p.id == period_id)
            .ok_or_else(|| AppError::NotFound(format!("pay period {period_id}")))?;
        if let Some(start) = patch.start_date {
            period.start_date = start;
        }
        if let Some(end) = patch.end_date {
            period.end_date = end;
        }
        if let Some(limit) = patch.limit {
            period.limit = limit;
        }
        if let Some(goal) = patch.savings_goal {
            period.savings_goal = goal;
        }
        if let Some(aside) = patch.set_aside {
            period.set_aside = aside;
        }
        Ok(period.clone())
    }

    async fn list_purchases(&self, user_id: UserId) -> AppResult<Vec<Purchase>> {
        let state = self.lock();
        Self::check_available(&state)?;
        Ok(state
            .purchases
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_purchases_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Purchase>> {
        let state = self.lock();
        Self::check_available(&state)?;
        Ok(state
            .purchases
            .iter()
            .filter(|p| p.user_id == user_id && p.date >= start && p.date <= end)
            .cloned()
            .collect())
    }

    async fn insert_purchase(&self, purchase: NewPurchase) -> AppResult<Purchase> {
        let mut state = self.lock();
        Self::check_available(&state)?;
        let stored = Purchase {
            id: PurchaseId::new(),
            user_id: purchase.user_id,
            period_id: purchase.period_id,
            date: purchase.date,
            expense: purchase.expense,
            description: purchase.description,
        };
        state.purchases.push(stored.clone());
        Ok(stored)
    }

    async fn get_user_profile(&self, user_id: UserId) -> AppResult<Option<UserProfile>> {
        let state = self.lock();
        Self::check_available(&state)?;
        Ok(state.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }
}
