//! Spending overview computations.
//!
//! Everything the overview screens display is derived here from plain
//! purchase slices; the UI is a pure consumer of these results.

pub mod service;
pub mod types;

pub use service::ReportService;
pub use types::{CategoryTotal, MonthGroup, MonthOverview, WeekOverview};

#[cfg(test)]
mod tests;
