//! Explicit period auto-creation.
//!
//! The original expense flow silently created a period when none
//! covered the purchase date. That behavior is a distinct, explicit
//! operation here so the resolver itself stays side-effect free.

use chrono::{Days, NaiveDate};
use mammon_shared::types::UserId;
use mammon_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::store::LedgerStore;

use super::resolver::select_current;
use super::types::{NewPayPeriod, PayPeriod};

/// Length of an auto-created period, in days after its start.
const DEFAULT_PERIOD_DAYS: u64 = 30;

/// Outcome of [`ensure_covering_period`].
#[derive(Debug, Clone)]
pub struct CoveringPeriod {
    /// The covering period, existing or freshly created.
    pub period: PayPeriod,
    /// True when a default period was created by this call.
    pub created: bool,
}

/// Returns a pay period covering `date`, creating a default one if none
/// exists.
///
/// The created period spans `[date, date + 30 days]` with all monetary
/// fields zero; the user is expected to edit it afterwards. Selection
/// among overlapping existing periods follows the resolver's policy.
///
/// # Errors
///
/// Propagates store failures. The creating write is never retried
/// automatically, to avoid duplicate periods.
#[instrument(skip(store))]
pub async fn ensure_covering_period<S: LedgerStore>(
    store: &S,
    user_id: UserId,
    date: NaiveDate,
) -> AppResult<CoveringPeriod> {
    let periods = store.list_pay_periods(user_id).await?;
    if let Some(existing) = select_current(&periods, date) {
        return Ok(CoveringPeriod {
            period: existing.clone(),
            created: false,
        });
    }

    let end_date = date
        .checked_add_days(Days::new(DEFAULT_PERIOD_DAYS))
        .ok_or_else(|| AppError::Internal(format!("date out of range: {date}")))?;
    let created = store
        .insert_pay_period(NewPayPeriod {
            user_id,
            start_date: date,
            end_date,
            limit: Decimal::ZERO,
            savings_goal: Decimal::ZERO,
            set_aside: Decimal::ZERO,
        })
        .await?;
    info!(period_id = %created.id, %end_date, "created default pay period");

    Ok(CoveringPeriod {
        period: created,
        created: true,
    })
}
