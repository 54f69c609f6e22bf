//! Credential check.

use std::io::Write;

use secrecy::SecretString;

use crate::auth::authenticate;
use crate::error::CliError;
use crate::file_store::FileStore;

/// Verify an email and password against the stored accounts.
///
/// # Errors
///
/// Returns `CliError::Auth` for an unknown account or wrong password.
pub async fn run(
    store: &FileStore,
    email: &str,
    password: &SecretString,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let data = store.load().await?;
    let user = match authenticate(&data, email, password) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(email, "Login failed");
            return Err(e.into());
        }
    };

    tracing::info!(user_id = %user.id, role = %user.role, "Login succeeded");
    writeln!(out, "Logged in as {} ({}, id {})", user.name, user.role, user.id)?;
    Ok(())
}
