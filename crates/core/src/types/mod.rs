//! Core value types for Sales Tracker.
//!
//! This module provides type-safe wrappers for record keys, emails, roles,
//! payment methods, sale dates and currency arithmetic.

pub mod date;
pub mod email;
pub mod id;
pub mod money;
pub mod payment;
pub mod role;

pub use date::{
    DISPLAY_DATE_FORMAT, MONTH_NAMES, MonthOption, SaleDate, month_name, month_options,
};
pub use email::{Email, EmailError};
pub use id::*;
pub use payment::PaymentMethod;
pub use role::Role;
