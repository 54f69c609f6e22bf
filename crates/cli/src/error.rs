//! Top-level CLI error.

use thiserror::Error;

use sales_tracker_core::{EmailError, StoreError, UserId, ValidationError};

use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::file_store::FileStoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    File(#[from] FileStoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("data file {0} already exists (use --force to overwrite)")]
    AlreadySeeded(String),

    #[error("user {0} is not an attendant")]
    NotAnAttendant(UserId),
}
