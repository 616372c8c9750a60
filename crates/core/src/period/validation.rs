//! Local pre-submit validation for the new/edit budget forms.

use chrono::NaiveDate;
use mammon_shared::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for a submitted period form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodValidationError {
    /// The period must span at least one day forward.
    #[error("Start date must be before end date")]
    StartNotBeforeEnd,
    /// The limit anchors every other amount.
    #[error("Budget limit must be greater than 0")]
    NonPositiveLimit,
    /// Savings goal is bounded by the limit.
    #[error("Savings goal must be \u{2265} 0 and \u{2264} budget limit")]
    SavingsGoalOutOfRange,
    /// Set-aside is bounded by what the savings goal leaves over.
    #[error("Set aside must be \u{2265} 0 and \u{2264} limit - savings goal")]
    SetAsideOutOfRange,
}

impl From<PeriodValidationError> for AppError {
    fn from(err: PeriodValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// User input for creating or editing a pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodForm {
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Spending limit.
    pub limit: Decimal,
    /// Savings goal.
    pub savings_goal: Decimal,
    /// Set-aside amount.
    pub set_aside: Decimal,
}

/// Validates a period form before it is sent anywhere.
///
/// Enforces `start < end`, `limit > 0`, `0 <= savings_goal <= limit`,
/// and `0 <= set_aside <= limit - savings_goal`.
///
/// # Errors
///
/// Returns the first rule violated, named after the offending field.
pub fn validate_period_form(form: &PeriodForm) -> Result<(), PeriodValidationError> {
    if form.start_date >= form.end_date {
        return Err(PeriodValidationError::StartNotBeforeEnd);
    }
    if form.limit <= Decimal::ZERO {
        return Err(PeriodValidationError::NonPositiveLimit);
    }
    if form.savings_goal < Decimal::ZERO || form.savings_goal > form.limit {
        return Err(PeriodValidationError::SavingsGoalOutOfRange);
    }
    if form.set_aside < Decimal::ZERO || form.set_aside > form.limit - form.savings_goal {
        return Err(PeriodValidationError::SetAsideOutOfRange);
    }
    Ok(())
}
