//! The reporting engine.
//!
//! A report is computed in three steps over records already in memory:
//!
//! 1. [`filter`] keeps the sales matching a [`FilterSpec`].
//! 2. [`breakdown_by_month`] groups the matches by calendar month.
//! 3. [`group_by_attendant`] totals the matches per attendant and applies
//!    each attendant's commission.
//!
//! [`build_report`] runs all three and adds grand totals and the year/month
//! choices for filter pickers. Every function here is pure.

pub mod attendant;
pub mod builder;
pub mod filter;
pub mod monthly;

#[cfg(test)]
mod fixtures;

pub use attendant::{AttendantStat, group_by_attendant};
pub use builder::{
    AttendantReport, CommissionedSale, Report, ReportBuilder, Totals, available_years,
    build_attendant_report, build_report,
};
pub use filter::{FilterSpec, SearchScope, filter, filter_in};
pub use monthly::{MonthlyBreakdown, MonthlyGroup, breakdown_by_month, group_by_month};
