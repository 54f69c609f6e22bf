//! End-to-end report computations.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sales_tracker_core::report::{
    build_attendant_report, build_report, filter, group_by_attendant, group_by_month,
};
use sales_tracker_core::{FilterSpec, UserId};
use sales_tracker_integration_tests::{attendant, ids, sale, scenario};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// =============================================================================
// Fixed scenarios
// =============================================================================

#[test]
fn test_monthly_groups_for_scenario() {
    let data = scenario();
    let groups = group_by_month(&data.sales);

    assert_eq!(groups.len(), 2);

    let february = groups.first().unwrap();
    assert_eq!((february.year, february.month), (2024, 2));
    assert_eq!(february.month_name, "Fevereiro");
    assert_eq!(february.count, 1);
    assert_eq!(february.total_value, dec("200"));

    let january = groups.get(1).unwrap();
    assert_eq!((january.year, january.month), (2024, 1));
    assert_eq!(january.count, 2);
    assert_eq!(january.total_value, dec("150"));
    assert_eq!(ids(&january.sales), ["s2", "s1"]);
}

#[test]
fn test_attendant_stats_for_scenario() {
    let data = scenario();
    let stats = group_by_attendant(&data.sales, &data.users);

    let order: Vec<&str> = stats.iter().map(|s| s.attendant_id.as_str()).collect();
    assert_eq!(order, ["a2", "a1"]);

    let a2 = stats.first().unwrap();
    assert_eq!(a2.sale_count, 1);
    assert_eq!(a2.total_value, dec("200"));
    assert_eq!(a2.total_commission, dec("20"));
    assert_eq!(a2.average_ticket, dec("200"));

    let a1 = stats.get(1).unwrap();
    assert_eq!(a1.sale_count, 2);
    assert_eq!(a1.total_value, dec("150"));
    assert_eq!(a1.total_commission, dec("7.5"));
    assert_eq!(a1.average_ticket, dec("75"));
}

#[test]
fn test_date_range_scenario() {
    let data = scenario();
    let spec = FilterSpec::default().with_date_range(
        NaiveDate::from_ymd_opt(2024, 1, 10),
        NaiveDate::from_ymd_opt(2024, 1, 31),
    );

    assert_eq!(ids(&filter(&data.sales, &spec)), ["s2"]);
}

#[test]
fn test_empty_sale_set() {
    let data = scenario();
    let report = build_report(&[], &data.users, &FilterSpec::default());

    assert_eq!(report.totals.value, Decimal::ZERO);
    assert_eq!(report.totals.count, 0);
    assert_eq!(report.totals.average_ticket, Decimal::ZERO);
    assert!(report.monthly_groups.is_empty());
    assert_eq!(report.attendant_stats.len(), 2);
    for stat in &report.attendant_stats {
        assert_eq!(stat.sale_count, 0);
        assert_eq!(stat.total_value, Decimal::ZERO);
        assert_eq!(stat.total_commission, Decimal::ZERO);
        assert_eq!(stat.average_ticket, Decimal::ZERO);
    }
}

// =============================================================================
// Properties over a mixed data set
// =============================================================================

fn mixed() -> sales_tracker_core::Dataset {
    let mut data = scenario();
    data.users.push(attendant("a3", None));
    data.sales.extend([
        sale("s4", "2023-12-31", 12.34, "a3"),
        sale("s5", "2024-01-20", 0.0, "a2"),
        sale("s6", "2023-03-15", 99.99, "gone"),
        sale("s7", "2024-02-01", 1.01, "a1"),
    ]);
    data
}

#[test]
fn test_filter_is_order_preserving_subsequence() {
    let data = mixed();
    let specs = [
        FilterSpec::default().with_search("atendente a1"),
        FilterSpec::default().with_year(2024),
        FilterSpec::default().with_month(12),
        FilterSpec::default()
            .with_attendant(UserId::new("a2"))
            .with_search("janeiro"),
    ];

    let all = ids(&data.sales);
    for spec in &specs {
        let matched = filter(&data.sales, spec);
        let matched = ids(&matched);
        let mut cursor = all.iter();
        assert!(
            matched.iter().all(|id| cursor.any(|a| a == id)),
            "{spec:?} reordered sales: {matched:?}"
        );
    }

    assert_eq!(filter(&data.sales, &FilterSpec::default()), data.sales);
}

#[test]
fn test_monthly_groups_partition_input() {
    let data = mixed();
    let groups = group_by_month(&data.sales);

    let grouped: usize = groups.iter().map(|g| g.count).sum();
    assert_eq!(grouped, data.sales.len());

    let mut seen: Vec<&str> = groups.iter().flat_map(|g| ids(&g.sales)).collect();
    seen.sort_unstable();
    let mut expected = ids(&data.sales);
    expected.sort_unstable();
    assert_eq!(seen, expected);

    for group in &groups {
        assert_eq!(group.count, group.sales.len());
        let sum: Decimal = group.sales.iter().map(|s| s.value).sum();
        assert_eq!(group.total_value, sum);
    }

    let keys: Vec<(i32, u32)> = groups.iter().map(|g| (g.year, g.month)).collect();
    assert_eq!(keys, [(2024, 2), (2024, 1), (2023, 12), (2023, 3)]);
}

#[test]
fn test_roster_sized_stats_and_commission_formula() {
    let data = mixed();
    let report = build_report(&data.sales, &data.users, &FilterSpec::default());

    assert_eq!(report.attendant_stats.len(), data.users.len());
    for stat in &report.attendant_stats {
        let user = data.users.iter().find(|u| u.id == stat.attendant_id).unwrap();
        let rate = user.commission.unwrap_or(Decimal::ZERO);
        assert_eq!(stat.commission_rate, rate);
        assert_eq!(
            stat.total_commission,
            stat.total_value * rate / Decimal::ONE_HUNDRED
        );
    }

    let a3 = report
        .attendant_stats
        .iter()
        .find(|s| s.attendant_id.as_str() == "a3")
        .unwrap();
    assert_eq!(a3.total_commission, Decimal::ZERO);

    // The sale of a deleted attendant still counts toward totals.
    assert_eq!(report.totals.count, 7);
    let stat_sales: usize = report.attendant_stats.iter().map(|s| s.sale_count).sum();
    assert_eq!(stat_sales, 6);
}

#[test]
fn test_build_report_is_idempotent() {
    let data = mixed();
    let before = data.clone();
    let spec = FilterSpec::default().with_search("fev");

    let first = build_report(&data.sales, &data.users, &spec);
    let second = build_report(&data.sales, &data.users, &spec);

    assert_eq!(first, second);
    assert_eq!(data, before);
}

#[test]
fn test_malformed_dates_are_counted_not_grouped() {
    let mut data = scenario();
    data.sales.push(sale("bad1", "05/01/2024", 30.0, "a1"));
    data.sales.push(sale("bad2", "", 20.0, "a2"));

    let report = build_report(&data.sales, &data.users, &FilterSpec::default());
    assert_eq!(report.malformed_dates, 2);
    assert_eq!(report.totals.count, 5);
    assert_eq!(report.totals.value, dec("400"));
    let grouped: usize = report.monthly_groups.iter().map(|g| g.count).sum();
    assert_eq!(grouped, 3);

    let in_2024 = build_report(
        &data.sales,
        &data.users,
        &FilterSpec::default().with_year(2024),
    );
    assert_eq!(in_2024.totals.count, 3);
}

#[test]
fn test_attendant_view_keeps_to_own_sales() {
    let data = mixed();
    let a1 = data.users.first().unwrap();

    let report = build_attendant_report(&data.sales, a1, &FilterSpec::default());
    let rows: Vec<(&str, Decimal)> = report
        .sales
        .iter()
        .map(|r| (r.sale.id.as_str(), r.commission))
        .collect();
    assert_eq!(
        rows,
        [("s7", dec("0.0505")), ("s2", dec("2.5")), ("s1", dec("5"))]
    );
    assert_eq!(report.totals.value, dec("151.01"));
    assert_eq!(report.total_commission, dec("7.5505"));
    assert_eq!(report.available_years, [2024]);
}

#[test]
fn test_attendant_search_matches_date_and_value_text() {
    let data = mixed();
    let a1 = data.users.first().unwrap();
    let search = |term: &str| {
        let spec = FilterSpec::default().with_search(term);
        let report = build_attendant_report(&data.sales, a1, &spec);
        report
            .sales
            .iter()
            .map(|r| r.sale.id.to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(search("100"), ["s1"]);
    assert_eq!(search("05/01/2024"), ["s1"]);
    assert_eq!(search("1.01"), ["s7"]);
    assert_eq!(search("01/02/2024"), ["s7"]);
    assert!(search("atendente").is_empty());
}
