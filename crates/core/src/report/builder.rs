//! Report composition.
//!
//! A report is rebuilt from scratch whenever the filter or the underlying
//! records change; nothing here holds state between calls.

use std::collections::BTreeSet;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use super::attendant::{AttendantStat, group_by_attendant};
use super::filter::{FilterSpec, SearchScope, filter, filter_in};
use super::monthly::{MonthlyGroup, breakdown_by_month, sort_newest_first};
use crate::models::{Sale, User};
use crate::store::{RecordStore, StoreError};
use crate::types::money::{average, percentage_of, total};
use crate::types::{MonthOption, UserId, month_options};

/// Grand totals over a set of sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub value: Decimal,
    pub count: usize,
    /// `value / count`, 0 when there are no sales.
    pub average_ticket: Decimal,
}

impl Totals {
    /// Sum the values of `sales`.
    #[must_use]
    pub fn of(sales: &[Sale]) -> Self {
        let value = total(sales.iter().map(|s| s.value));
        Self {
            value,
            count: sales.len(),
            average_ticket: average(value, sales.len()),
        }
    }
}

/// The admin view: every attendant's sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Matching sales, in storage order.
    pub filtered_sales: Vec<Sale>,
    pub monthly_groups: Vec<MonthlyGroup>,
    pub attendant_stats: Vec<AttendantStat>,
    pub totals: Totals,
    /// Years present in the whole collection, newest first.
    pub available_years: Vec<i32>,
    pub available_months: Vec<MonthOption>,
    /// Matching sales left out of `monthly_groups` because their date does not parse.
    pub malformed_dates: usize,
}

/// A sale in the attendant view with the commission it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionedSale {
    #[serde(flatten)]
    pub sale: Sale,
    /// `sale.value` times the attendant's current rate.
    pub commission: Decimal,
}

/// The attendant view: one attendant's own sales and commission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendantReport {
    pub attendant_id: UserId,
    pub attendant_name: String,
    /// Matching sales, newest first.
    pub sales: Vec<CommissionedSale>,
    pub totals: Totals,
    pub commission_rate: Decimal,
    pub total_commission: Decimal,
    /// Years present in the attendant's own sales, newest first.
    pub available_years: Vec<i32>,
    pub available_months: Vec<MonthOption>,
}

/// Distinct years among `sales`, newest first. Malformed dates are skipped.
#[must_use]
pub fn available_years(sales: &[Sale]) -> Vec<i32> {
    let years: BTreeSet<i32> = sales
        .iter()
        .filter_map(|s| s.date.date())
        .map(|d| d.year())
        .collect();
    years.into_iter().rev().collect()
}

/// Build the admin report.
///
/// `users` may contain every account; only attendants get a performance row.
#[must_use]
#[instrument(skip_all, fields(sales = sales.len(), users = users.len(), filtered = spec.is_active()))]
pub fn build_report(sales: &[Sale], users: &[User], spec: &FilterSpec) -> Report {
    let filtered_sales = filter(sales, spec);
    let breakdown = breakdown_by_month(&filtered_sales);

    let roster: Vec<User> = users.iter().filter(|u| u.is_attendant()).cloned().collect();
    let attendant_stats = group_by_attendant(&filtered_sales, &roster);

    if breakdown.malformed_dates > 0 {
        tracing::warn!(
            malformed = breakdown.malformed_dates,
            "Sales with unparseable dates left out of monthly groups"
        );
    }
    tracing::debug!(
        matched = filtered_sales.len(),
        months = breakdown.groups.len(),
        attendants = attendant_stats.len(),
        "Report built"
    );

    Report {
        totals: Totals::of(&filtered_sales),
        available_years: available_years(sales),
        available_months: month_options(),
        monthly_groups: breakdown.groups,
        malformed_dates: breakdown.malformed_dates,
        attendant_stats,
        filtered_sales,
    }
}

/// Build the report an attendant sees about their own sales.
///
/// Any attendant restriction in `spec` is replaced by `attendant`, and the
/// search term is matched as [`SearchScope::OwnSales`].
#[must_use]
#[instrument(skip_all, fields(attendant_id = %attendant.id))]
pub fn build_attendant_report(
    sales: &[Sale],
    attendant: &User,
    spec: &FilterSpec,
) -> AttendantReport {
    let own: Vec<Sale> = sales
        .iter()
        .filter(|s| s.attendant_id == attendant.id)
        .cloned()
        .collect();

    let mut spec = spec.clone();
    spec.attendant_id = None;
    let mut matching = filter_in(&own, &spec, SearchScope::OwnSales);
    sort_newest_first(&mut matching);

    let totals = Totals::of(&matching);
    let commission_rate = attendant.commission_rate();
    let sales = matching
        .into_iter()
        .map(|sale| CommissionedSale {
            commission: percentage_of(sale.value, commission_rate),
            sale,
        })
        .collect();

    AttendantReport {
        attendant_id: attendant.id.clone(),
        attendant_name: attendant.name.clone(),
        total_commission: percentage_of(totals.value, commission_rate),
        commission_rate,
        totals,
        available_years: available_years(&own),
        available_months: month_options(),
        sales,
    }
}

/// Builds reports from a [`RecordStore`].
pub struct ReportBuilder<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> ReportBuilder<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Build the admin report from the store's current records.
    ///
    /// # Errors
    ///
    /// Returns any error raised while listing sales or users.
    pub fn build(&self, spec: &FilterSpec) -> Result<Report, StoreError> {
        let sales = self.store.list_sales()?;
        let users = self.store.list_users()?;
        Ok(build_report(&sales, &users, spec))
    }

    /// Build an attendant's own report from the store's current records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no account has key `attendant_id`,
    /// or any error raised while listing records.
    pub fn build_for_attendant(
        &self,
        attendant_id: &UserId,
        spec: &FilterSpec,
    ) -> Result<AttendantReport, StoreError> {
        let users = self.store.list_users()?;
        let attendant = users
            .iter()
            .find(|u| &u.id == attendant_id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "user",
                id: attendant_id.to_string(),
            })?;
        let sales = self.store.list_sales()?;
        Ok(build_attendant_report(&sales, attendant, spec))
    }
}
