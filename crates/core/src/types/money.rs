//! Decimal arithmetic helpers for currency amounts and percentages.
//!
//! Stored values are only checked for sign, so sums and products saturate at
//! [`Decimal::MAX`] instead of panicking on overflow.

use rust_decimal::Decimal;

/// Mean of `total` over `count` items, zero when there are no items.
#[must_use]
pub fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total
        .checked_div(Decimal::from(count))
        .unwrap_or(Decimal::ZERO)
}

/// Sum of `amounts`, saturating at the representable bounds.
#[must_use]
pub fn total(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `percent`% of `amount`, saturating at the representable bounds.
#[must_use]
pub fn percentage_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.checked_mul(percent).map_or_else(
        || (amount / Decimal::ONE_HUNDRED).saturating_mul(percent),
        |product| product / Decimal::ONE_HUNDRED,
    )
}

/// Format an amount in reais, e.g. `R$ 1234.50`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {:.2}", amount.round_dp(2))
}
