//! Report service tests.

use chrono::NaiveDate;
use mammon_shared::types::{PurchaseId, UserId};
use rust_decimal_macros::dec;

use crate::purchase::Purchase;

use super::service::ReportService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn purchase(on: NaiveDate, amount: rust_decimal::Decimal, description: &str) -> Purchase {
    Purchase {
        id: PurchaseId::new(),
        user_id: UserId::new(),
        period_id: None,
        date: on,
        expense: amount,
        description: description.to_string(),
    }
}

#[test]
fn month_overview_marks_days_and_totals() {
    let purchases = vec![
        purchase(date(2024, 4, 5), dec!(20), "Coffee (Personal)"),
        purchase(date(2024, 4, 5), dec!(10), "Snack (Personal)"),
        purchase(date(2024, 4, 20), dec!(30), "Book (Leisure)"),
        purchase(date(2024, 5, 1), dec!(99), "Outside month (Other)"),
    ];

    let overview = ReportService::month_overview(&purchases, 2024, 4, None);

    assert_eq!(overview.total_spent, dec!(60));
    assert_eq!(
        overview.marked_dates.into_iter().collect::<Vec<_>>(),
        vec![date(2024, 4, 5), date(2024, 4, 20)]
    );
    // 60 / 30 days
    assert_eq!(overview.daily_average, dec!(2.00));
    assert_eq!(overview.progress_percent, dec!(0));
}

#[test]
fn month_progress_is_capped_at_one_hundred() {
    let purchases = vec![purchase(date(2024, 4, 5), dec!(250), "Rent (Bills/Utilities)")];

    let overview = ReportService::month_overview(&purchases, 2024, 4, Some(dec!(200)));
    assert_eq!(overview.progress_percent, dec!(100));

    let under = ReportService::month_overview(&purchases, 2024, 4, Some(dec!(500)));
    assert_eq!(under.progress_percent, dec!(50.00));
}

#[test]
fn month_progress_without_cap_is_zero() {
    let purchases = vec![purchase(date(2024, 4, 5), dec!(250), "Rent")];

    let none = ReportService::month_overview(&purchases, 2024, 4, None);
    assert_eq!(none.progress_percent, dec!(0));

    let zero_cap = ReportService::month_overview(&purchases, 2024, 4, Some(dec!(0)));
    assert_eq!(zero_cap.progress_percent, dec!(0));
}

#[test]
fn february_leap_year_average_uses_29_days() {
    let purchases = vec![purchase(date(2024, 2, 10), dec!(29), "Coffee (Personal)")];

    let overview = ReportService::month_overview(&purchases, 2024, 2, None);
    assert_eq!(overview.daily_average, dec!(1.00));
}

#[test]
fn week_overview_has_an_entry_for_every_day() {
    let monday = date(2024, 4, 15);
    let purchases = vec![
        purchase(date(2024, 4, 15), dec!(10), "Lunch (Leisure)"),
        purchase(date(2024, 4, 21), dec!(4), "Sunday snack (Leisure)"),
        purchase(date(2024, 4, 22), dec!(50), "Next week (Other)"),
    ];

    let overview = ReportService::week_overview(&purchases, monday);

    assert_eq!(overview.daily_totals.len(), 7);
    assert_eq!(overview.daily_totals[&date(2024, 4, 15)], dec!(10));
    assert_eq!(overview.daily_totals[&date(2024, 4, 16)], dec!(0));
    assert_eq!(overview.daily_totals[&date(2024, 4, 21)], dec!(4));
    assert_eq!(overview.total_spent, dec!(14));
    assert_eq!(overview.daily_average, dec!(2.00));
}

#[test]
fn week_start_is_the_preceding_monday() {
    assert_eq!(
        ReportService::week_start_for(date(2024, 4, 18)), // a Thursday
        date(2024, 4, 15)
    );
    assert_eq!(
        ReportService::week_start_for(date(2024, 4, 15)), // already Monday
        date(2024, 4, 15)
    );
    assert_eq!(
        ReportService::week_start_for(date(2024, 4, 21)), // a Sunday
        date(2024, 4, 15)
    );
}

#[test]
fn category_breakdown_sorts_largest_first() {
    let purchases = vec![
        purchase(date(2024, 4, 1), dec!(10), "Coffee (Personal)"),
        purchase(date(2024, 4, 2), dec!(40), "Electricity (Bills/Utilities)"),
        purchase(date(2024, 4, 3), dec!(30), "Cinema (Leisure)"),
        purchase(date(2024, 4, 4), dec!(20), "Rent"),
    ];

    let breakdown = ReportService::category_breakdown(&purchases);

    let labels: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(labels, vec!["Bills/Utilities", "Leisure", "Other", "Personal"]);
    assert_eq!(breakdown[0].total, dec!(40));
    assert_eq!(breakdown[0].share_percent, dec!(40.00));
    assert_eq!(breakdown[2].category, "Other");
}

#[test]
fn category_ties_order_by_name() {
    let purchases = vec![
        purchase(date(2024, 4, 1), dec!(10), "B (Services)"),
        purchase(date(2024, 4, 2), dec!(10), "A (Leisure)"),
    ];

    let breakdown = ReportService::category_breakdown(&purchases);
    let labels: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(labels, vec!["Leisure", "Services"]);
}

#[test]
fn empty_breakdown_for_no_purchases() {
    assert!(ReportService::category_breakdown(&[]).is_empty());
}

#[test]
fn monthly_history_groups_newest_first() {
    let purchases = vec![
        purchase(date(2024, 3, 10), dec!(5), "Old (Other)"),
        purchase(date(2024, 4, 2), dec!(10), "Early April (Other)"),
        purchase(date(2024, 4, 25), dec!(20), "Late April (Other)"),
    ];

    let history = ReportService::monthly_history(&purchases);

    assert_eq!(history.len(), 2);
    assert_eq!((history[0].year, history[0].month), (2024, 4));
    assert_eq!(history[0].purchases[0].date, date(2024, 4, 25));
    assert_eq!((history[1].year, history[1].month), (2024, 3));
}
