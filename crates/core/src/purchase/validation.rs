//! Local pre-submit validation for the add-expense form.
//!
//! Failing input never reaches the remote store; errors are reported
//! inline next to the offending field.

use chrono::NaiveDate;
use mammon_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures for a submitted expense.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    /// Amount must be strictly positive.
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    /// Amounts are entered in currency units with at most two decimals.
    #[error("Amount must have at most two decimal places")]
    TooManyDecimalPlaces,
    /// The description field is required.
    #[error("Description must not be empty")]
    EmptyDescription,
    /// The date did not parse as MM/DD/YYYY.
    #[error("Date must be in MM/DD/YYYY format: {0}")]
    InvalidDate(String),
}

impl From<ExpenseValidationError> for AppError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Validates an expense amount and description.
///
/// # Errors
///
/// Returns the first failing rule: positive amount, at most two decimal
/// places, non-empty description.
pub fn validate_expense(amount: Decimal, description: &str) -> Result<(), ExpenseValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ExpenseValidationError::NonPositiveAmount);
    }
    if amount.normalize().scale() > 2 {
        return Err(ExpenseValidationError::TooManyDecimalPlaces);
    }
    if description.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }
    Ok(())
}

/// Parses a form date entered as `MM/DD/YYYY`.
///
/// # Errors
///
/// Returns [`ExpenseValidationError::InvalidDate`] when the input does
/// not parse.
pub fn parse_form_date(input: &str) -> Result<NaiveDate, ExpenseValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%m/%d/%Y")
        .map_err(|_| ExpenseValidationError::InvalidDate(input.to_string()))
}
