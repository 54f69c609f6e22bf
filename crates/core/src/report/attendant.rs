//! Per-attendant performance and commission.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Sale, User};
use crate::types::UserId;
use crate::types::money::{average, percentage_of, total};

/// One row of the attendant performance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendantStat {
    pub attendant_id: UserId,
    /// Current account name.
    pub name: String,
    /// Commission percentage applied, absent resolved to 0.
    pub commission_rate: Decimal,
    pub sale_count: usize,
    pub total_value: Decimal,
    pub total_commission: Decimal,
    /// Mean sale value, 0 without sales.
    pub average_ticket: Decimal,
}

impl AttendantStat {
    fn new(attendant: &User, sales: &[Sale]) -> Self {
        let own: Vec<Decimal> = sales
            .iter()
            .filter(|s| s.attendant_id == attendant.id)
            .map(|s| s.value)
            .collect();
        let sale_count = own.len();
        let total_value = total(own);
        let commission_rate = attendant.commission_rate();

        Self {
            attendant_id: attendant.id.clone(),
            name: attendant.name.clone(),
            commission_rate,
            sale_count,
            total_value,
            total_commission: percentage_of(total_value, commission_rate),
            average_ticket: average(total_value, sale_count),
        }
    }
}

/// Totals and commission for every attendant in `roster`.
///
/// Attendants without sales are included with zero totals. Rows are ordered
/// by total value, highest first; equal totals keep roster order.
#[must_use]
pub fn group_by_attendant(sales: &[Sale], roster: &[User]) -> Vec<AttendantStat> {
    let mut stats: Vec<AttendantStat> = roster
        .iter()
        .map(|attendant| AttendantStat::new(attendant, sales))
        .collect();
    stats.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    stats
}
