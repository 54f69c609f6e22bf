//! Month-by-month breakdown of sales.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Sale;
use crate::types::money::total;
use crate::types::month_name;

/// Sales of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGroup {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub month_name: &'static str,
    /// Newest first; sales on the same day keep their input order.
    pub sales: Vec<Sale>,
    pub total_value: Decimal,
    pub count: usize,
}

/// Monthly groups plus the sales that could not be placed in a month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    /// Newest month first.
    pub groups: Vec<MonthlyGroup>,
    /// Sales skipped because their date does not parse.
    pub malformed_dates: usize,
}

/// Group sales by the calendar month of their date, newest month first.
///
/// Sales with malformed dates are left out; use [`breakdown_by_month`] to
/// also get how many were skipped.
#[must_use]
pub fn group_by_month(sales: &[Sale]) -> Vec<MonthlyGroup> {
    breakdown_by_month(sales).groups
}

/// [`group_by_month`] plus a count of sales with malformed dates.
#[must_use]
pub fn breakdown_by_month(sales: &[Sale]) -> MonthlyBreakdown {
    let mut buckets: BTreeMap<(i32, u32), Vec<(NaiveDate, &Sale)>> = BTreeMap::new();
    let mut malformed_dates = 0;

    for sale in sales {
        let Some(date) = sale.date.date() else {
            malformed_dates += 1;
            continue;
        };
        buckets
            .entry((date.year(), date.month()))
            .or_default()
            .push((date, sale));
    }

    let groups = buckets
        .into_iter()
        .rev()
        .map(|((year, month), mut members)| {
            members.sort_by_key(|(date, _)| Reverse(*date));
            MonthlyGroup {
                year,
                month,
                month_name: month_name(month).unwrap_or_default(),
                total_value: total(members.iter().map(|(_, s)| s.value)),
                count: members.len(),
                sales: members.into_iter().map(|(_, s)| s.clone()).collect(),
            }
        })
        .collect();

    MonthlyBreakdown {
        groups,
        malformed_dates,
    }
}

/// Order sales newest first, malformed dates last, keeping input order on ties.
pub fn sort_newest_first(sales: &mut [Sale]) {
    sales.sort_by_cached_key(|s| Reverse(s.date.date()));
}
