//! Input validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating data entered for a new record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is blank.
    #[error("{0} cannot be empty")]
    Blank(&'static str),

    /// Sale value below zero.
    #[error("sale value cannot be negative: {0}")]
    NegativeValue(Decimal),

    /// Commission outside 0-100%.
    #[error("commission must be between 0 and 100, got {0}")]
    CommissionOutOfRange(Decimal),

    /// Sale entered without a recognized payment method.
    #[error("a payment method must be selected")]
    MissingPaymentMethod,
}
