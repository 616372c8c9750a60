//! Report data types.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::purchase::Purchase;

/// Calendar-month spending overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthOverview {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Days of the month with at least one purchase (calendar markers).
    pub marked_dates: BTreeSet<NaiveDate>,
    /// Total spent within the month.
    pub total_spent: Decimal,
    /// Total divided by the number of days in the month, 2 dp.
    pub daily_average: Decimal,
    /// Spend as a percentage of the flat budget cap, capped at 100.
    /// Zero when no cap is set.
    pub progress_percent: Decimal,
}

/// Seven-day spending overview starting on a Monday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekOverview {
    /// First day of the week (Monday).
    pub week_start: NaiveDate,
    /// Spend per day, with an entry for every day of the week.
    pub daily_totals: BTreeMap<NaiveDate, Decimal>,
    /// Total spent within the week.
    pub total_spent: Decimal,
    /// Total divided by seven, 2 dp.
    pub daily_average: Decimal,
}

/// Aggregated spend for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category parsed from the purchase descriptions.
    pub category: String,
    /// Sum of expenses in this category.
    pub total: Decimal,
    /// Share of overall spend, 2 dp. Zero when overall spend is zero.
    pub share_percent: Decimal,
}

/// Purchases grouped under one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGroup {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Purchases in the month, newest first.
    pub purchases: Vec<Purchase>,
}
