//! Pay-period resolution and remaining-balance calculation.

pub mod resolver;
pub mod service;
pub mod types;
pub mod validation;

pub use resolver::{PayPeriodResolver, PeriodSummary, ResolvedPeriods};
pub use service::{CoveringPeriod, ensure_covering_period};
pub use types::{NewPayPeriod, PayPeriod, PayPeriodPatch};
pub use validation::{PeriodForm, PeriodValidationError, validate_period_form};


#[cfg(test)]
mod resolver_props;
