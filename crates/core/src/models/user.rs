//! Account records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::types::{Email, Role, UserId};

/// An account (attendant or admin).
///
/// Only `commission` is ever changed after creation. The credential is an
/// Argon2 PHC string produced by the caller; this crate never sees plaintext.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique key.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across accounts.
    pub email: Email,
    /// Hashed credential.
    pub password_hash: String,
    /// Permission level.
    pub role: Role,
    /// Commission percentage. Absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<Decimal>,
}

impl User {
    /// Build a new attendant account with a fresh key.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Blank` for an empty name, or
    /// `ValidationError::CommissionOutOfRange` for a commission outside 0-100.
    pub fn new_attendant(
        name: &str,
        email: Email,
        password_hash: String,
        commission: Decimal,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Blank("name"));
        }

        Ok(Self {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            password_hash,
            role: Role::Attendant,
            commission: Some(validate_commission(commission)?),
        })
    }

    /// Whether this account earns commission on sales.
    #[must_use]
    pub fn is_attendant(&self) -> bool {
        self.role == Role::Attendant
    }

    /// Commission percentage with the absent case resolved to zero.
    #[must_use]
    pub fn commission_rate(&self) -> Decimal {
        self.commission.unwrap_or(Decimal::ZERO)
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .field("commission", &self.commission)
            .finish()
    }
}

/// Check a commission percentage entered by an admin.
///
/// # Errors
///
/// Returns `ValidationError::CommissionOutOfRange` unless `0 <= pct <= 100`.
pub fn validate_commission(pct: Decimal) -> Result<Decimal, ValidationError> {
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(ValidationError::CommissionOutOfRange(pct));
    }
    Ok(pct)
}
