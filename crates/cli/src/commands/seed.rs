//! Demo data seeding.

use std::io::Write;

use secrecy::{ExposeSecret, SecretString};

use sales_tracker_core::Dataset;

use crate::auth::{hash_password, validate_password};
use crate::error::CliError;
use crate::file_store::FileStore;

/// Write the demo accounts to a fresh data file.
///
/// Every account gets `password` as its initial credential.
///
/// # Errors
///
/// Returns `CliError::AlreadySeeded` if the file exists and `force` is not
/// set, or an error if the password is too weak or the file cannot be written.
pub async fn run(
    store: &FileStore,
    password: &SecretString,
    force: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    validate_password(password)?;
    if !force && store.exists().await? {
        return Err(CliError::AlreadySeeded(store.path().display().to_string()));
    }

    let data = Dataset::demo_roster(hash_password, password.expose_secret())?;
    store.save(&data).await?;

    tracing::info!(path = %store.path().display(), users = data.users.len(), "Demo data seeded");
    for user in &data.users {
        writeln!(out, "{:<6} {:<15} {:<20} {}", user.id, user.name, user.email, user.role)?;
    }
    Ok(())
}
