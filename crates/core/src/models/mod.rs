//! Domain records: accounts and sales.

pub mod error;
pub mod sale;
pub mod user;

pub use error::ValidationError;
pub use sale::{Sale, SaleDraft};
pub use user::{User, validate_commission};
