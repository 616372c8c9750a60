//! Logged expenses and their categorization.

pub mod category;
pub mod types;
pub mod validation;

pub use category::{DEFAULT_CATEGORY, extract_category};
pub use types::{NewPurchase, Purchase};
pub use validation::{ExpenseValidationError, parse_form_date, validate_expense};
