//! Report generation over purchase slices.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::purchase::Purchase;

use super::types::{CategoryTotal, MonthGroup, MonthOverview, WeekOverview};

const PERCENT_CAP: Decimal = Decimal::ONE_HUNDRED;

/// Service for computing spending overviews.
pub struct ReportService;

impl ReportService {
    /// Computes the calendar-month overview.
    ///
    /// Purchases outside the given month are ignored. The daily average
    /// divides by the number of days in the month; progress is spend
    /// over `budget_cap`, capped at 100 percent.
    #[must_use]
    pub fn month_overview(
        purchases: &[Purchase],
        year: i32,
        month: u32,
        budget_cap: Option<Decimal>,
    ) -> MonthOverview {
        let mut marked_dates = BTreeSet::new();
        let mut total_spent = Decimal::ZERO;
        for purchase in purchases {
            if purchase.date.year() == year && purchase.date.month() == month {
                marked_dates.insert(purchase.date);
                total_spent += purchase.expense;
            }
        }

        let days = Decimal::from(days_in_month(year, month));
        let daily_average = if days.is_zero() {
            Decimal::ZERO
        } else {
            (total_spent / days).round_dp(2)
        };

        let progress_percent = match budget_cap {
            Some(cap) if cap > Decimal::ZERO => {
                (total_spent / cap * PERCENT_CAP).round_dp(2).min(PERCENT_CAP)
            }
            _ => Decimal::ZERO,
        };

        MonthOverview {
            year,
            month,
            marked_dates,
            total_spent,
            daily_average,
            progress_percent,
        }
    }

    /// Computes the seven-day overview for the week at `week_start`.
    ///
    /// Every day of the week gets an entry, zero when nothing was spent.
    #[must_use]
    pub fn week_overview(purchases: &[Purchase], week_start: NaiveDate) -> WeekOverview {
        let mut daily_totals: BTreeMap<NaiveDate, Decimal> = (0..7u64)
            .filter_map(|i| week_start.checked_add_days(Days::new(i)))
            .map(|day| (day, Decimal::ZERO))
            .collect();

        let mut total_spent = Decimal::ZERO;
        for purchase in purchases {
            if let Some(day_total) = daily_totals.get_mut(&purchase.date) {
                *day_total += purchase.expense;
                total_spent += purchase.expense;
            }
        }

        let daily_average = (total_spent / Decimal::from(7)).round_dp(2);

        WeekOverview {
            week_start,
            daily_totals,
            total_spent,
            daily_average,
        }
    }

    /// Returns the Monday on or before the given date.
    #[must_use]
    pub fn week_start_for(date: NaiveDate) -> NaiveDate {
        date.week(Weekday::Mon).first_day()
    }

    /// Aggregates spend per category, largest first.
    ///
    /// Ties are broken by category name so the ordering is stable
    /// across calls.
    #[must_use]
    pub fn category_breakdown(purchases: &[Purchase]) -> Vec<CategoryTotal> {
        let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
        let mut overall = Decimal::ZERO;
        for purchase in purchases {
            *totals.entry(purchase.category()).or_default() += purchase.expense;
            overall += purchase.expense;
        }

        let mut breakdown: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| {
                let share_percent = if overall.is_zero() {
                    Decimal::ZERO
                } else {
                    (total / overall * PERCENT_CAP).round_dp(2)
                };
                CategoryTotal {
                    category: category.to_string(),
                    total,
                    share_percent,
                }
            })
            .collect();
        breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
        breakdown
    }

    /// Groups purchases by calendar month, newest month first.
    ///
    /// Within a month, purchases are ordered newest first.
    #[must_use]
    pub fn monthly_history(purchases: &[Purchase]) -> Vec<MonthGroup> {
        let mut groups: BTreeMap<(i32, u32), Vec<Purchase>> = BTreeMap::new();
        for purchase in purchases {
            groups
                .entry((purchase.date.year(), purchase.date.month()))
                .or_default()
                .push(purchase.clone());
        }

        groups
            .into_iter()
            .rev()
            .map(|((year, month), mut purchases)| {
                purchases.sort_by(|a, b| b.date.cmp(&a.date));
                MonthGroup {
                    year,
                    month,
                    purchases,
                }
            })
            .collect()
    }
}

/// Number of days in the given calendar month; zero for invalid input.
fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month.map_or(0, |next| {
        u32::try_from(next.signed_duration_since(first).num_days()).unwrap_or(0)
    })
}
