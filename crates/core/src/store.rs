//! Record store: the collections the reporting engine reads from.
//!
//! [`RecordStore`] is the seam between the engine and wherever records live.
//! [`Dataset`] is the in-memory implementation; it serializes to the
//! `{ "users": [...], "sales": [...] }` document persisted by the CLI.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Sale, User};
use crate::types::{Email, Role, SaleId, UserId};

/// Errors returned by record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given key.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind ("user" or "sale").
        kind: &'static str,
        /// Requested key.
        id: String,
    },

    /// A record with the same key already exists.
    #[error("{kind} already exists: {id}")]
    DuplicateId {
        /// Record kind ("user" or "sale").
        kind: &'static str,
        /// Conflicting key.
        id: String,
    },

    /// Another account already uses this email.
    #[error("email already in use: {0}")]
    DuplicateEmail(Email),

    /// The record breaks a model invariant.
    #[error("invalid record: {0}")]
    Invalid(String),

    /// Backing storage failed.
    #[error("storage error: {0}")]
    Backend(String),
}

/// Read access to the user and sale collections.
pub trait RecordStore {
    /// All sales, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the backing storage cannot be read.
    fn list_sales(&self) -> Result<Vec<Sale>, StoreError>;

    /// All accounts, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the backing storage cannot be read.
    fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

/// In-memory user and sale collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

impl Dataset {
    /// The demo accounts a fresh installation starts with.
    ///
    /// `hash` turns each account's initial password into a stored credential.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `hash`.
    pub fn demo_roster<E>(
        mut hash: impl FnMut(&str) -> Result<String, E>,
        initial_password: &str,
    ) -> Result<Self, E> {
        let five = Some(Decimal::new(5, 0));
        let seven = Some(Decimal::new(7, 0));
        let accounts = [
            ("1", "João Silva", "joao@empresa.com", Role::Attendant, five),
            ("2", "Maria Santos", "maria@empresa.com", Role::Attendant, seven),
            ("admin", "Administrador", "admin@empresa.com", Role::Admin, None),
        ];

        let mut users = Vec::with_capacity(accounts.len());
        for (id, name, email, role, commission) in accounts {
            users.push(User {
                id: UserId::new(id),
                name: name.to_owned(),
                email: Email::from_normalized(email),
                password_hash: hash(initial_password)?,
                role,
                commission,
            });
        }

        Ok(Self {
            users,
            sales: Vec::new(),
        })
    }

    /// Look up an account by key.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Look up an account by login email.
    #[must_use]
    pub fn find_user_by_email(&self, email: &Email) -> Option<&User> {
        self.users.iter().find(|u| &u.email == email)
    }

    /// Accounts with the attendant role, in storage order.
    pub fn attendants(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.is_attendant())
    }

    /// Append a sale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if the key is taken, or
    /// `StoreError::Invalid` for a negative value.
    pub fn add_sale(&mut self, sale: Sale) -> Result<(), StoreError> {
        if self.sales.iter().any(|s| s.id == sale.id) {
            return Err(StoreError::DuplicateId {
                kind: "sale",
                id: sale.id.to_string(),
            });
        }
        if sale.value < Decimal::ZERO {
            return Err(StoreError::Invalid(format!(
                "sale {} has negative value {}",
                sale.id, sale.value
            )));
        }

        tracing::debug!(sale_id = %sale.id, attendant_id = %sale.attendant_id, "Sale added");
        self.sales.push(sale);
        Ok(())
    }

    /// Remove a sale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no sale has this key.
    pub fn delete_sale(&mut self, id: &SaleId) -> Result<Sale, StoreError> {
        let index = self
            .sales
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "sale",
                id: id.to_string(),
            })?;
        Ok(self.sales.remove(index))
    }

    /// Append an account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` or `StoreError::DuplicateEmail` if
    /// the key or email is already taken, or `StoreError::Invalid` for a
    /// negative commission.
    pub fn add_user(&mut self, user: User) -> Result<(), StoreError> {
        if self.user(&user.id).is_some() {
            return Err(StoreError::DuplicateId {
                kind: "user",
                id: user.id.to_string(),
            });
        }
        if self.find_user_by_email(&user.email).is_some() {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        if user.commission.is_some_and(|c| c < Decimal::ZERO) {
            return Err(StoreError::Invalid(format!(
                "user {} has a negative commission",
                user.id
            )));
        }

        self.users.push(user);
        Ok(())
    }

    /// Remove an account. Its sales stay in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no account has this key.
    pub fn delete_user(&mut self, id: &UserId) -> Result<User, StoreError> {
        let index = self
            .users
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "user",
                id: id.to_string(),
            })?;
        Ok(self.users.remove(index))
    }

    /// Set an account's commission percentage.
    ///
    /// The upper bound is an input rule (see
    /// [`validate_commission`](crate::models::validate_commission)); only
    /// negatives are rejected here.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown key, or
    /// `StoreError::Invalid` for a negative percentage.
    pub fn update_commission(&mut self, id: &UserId, pct: Decimal) -> Result<(), StoreError> {
        if pct < Decimal::ZERO {
            return Err(StoreError::Invalid(format!("negative commission {pct}")));
        }
        let user = self
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "user",
                id: id.to_string(),
            })?;
        user.commission = Some(pct);
        Ok(())
    }
}

impl RecordStore for Dataset {
    fn list_sales(&self) -> Result<Vec<Sale>, StoreError> {
        Ok(self.sales.clone())
    }

    fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.clone())
    }
}
