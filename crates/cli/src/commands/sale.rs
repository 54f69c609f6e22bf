//! Sale entry and removal.

use std::io::Write;

use sales_tracker_core::{SaleDraft, SaleId, StoreError, UserId, types::money::format_brl};

use crate::error::CliError;
use crate::file_store::FileStore;

/// Record a sale for an attendant.
///
/// # Errors
///
/// Returns an error if the attendant does not exist, is not an attendant,
/// or the draft fails validation.
pub async fn add(
    store: &FileStore,
    attendant_id: &UserId,
    draft: SaleDraft,
    out: &mut impl Write,
) -> Result<SaleId, CliError> {
    let mut data = store.load().await?;

    let attendant = data
        .user(attendant_id)
        .ok_or_else(|| StoreError::NotFound {
            kind: "user",
            id: attendant_id.to_string(),
        })?;
    if !attendant.is_attendant() {
        return Err(CliError::NotAnAttendant(attendant_id.clone()));
    }

    let sale = draft.into_sale(SaleId::generate(), attendant)?;
    let id = sale.id.clone();
    let value = sale.value;
    data.add_sale(sale)?;
    store.save(&data).await?;

    tracing::info!(sale_id = %id, attendant_id = %attendant_id, "Sale recorded");
    writeln!(out, "Sale {id} recorded: {}", format_brl(value))?;
    Ok(id)
}

/// Remove a sale.
///
/// # Errors
///
/// Returns an error if no sale has this id or the data file cannot be written.
pub async fn delete(store: &FileStore, id: &SaleId, out: &mut impl Write) -> Result<(), CliError> {
    let mut data = store.load().await?;
    let removed = data.delete_sale(id)?;
    store.save(&data).await?;

    tracing::info!(sale_id = %id, "Sale deleted");
    writeln!(
        out,
        "Sale {id} deleted ({}, {})",
        removed.client_name,
        format_brl(removed.value)
    )?;
    Ok(())
}
