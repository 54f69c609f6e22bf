//! JSON file persistence for the [`Dataset`].

use std::path::{Path, PathBuf};

use thiserror::Error;

use sales_tracker_core::Dataset;

/// Errors raised while reading or writing the data file.
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The data file holding every user and sale.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists.
    ///
    /// # Errors
    ///
    /// Returns `FileStoreError::Io` if the path cannot be checked.
    pub async fn exists(&self) -> Result<bool, FileStoreError> {
        tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))
    }

    /// Read the data file. A missing file yields an empty dataset.
    ///
    /// # Errors
    ///
    /// Returns `FileStoreError::Io` if the file cannot be read, or
    /// `FileStoreError::Json` if it is not a valid dataset document.
    pub async fn load(&self) -> Result<Dataset, FileStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Data file not found, starting empty");
                return Ok(Dataset::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let data: Dataset = serde_json::from_slice(&bytes).map_err(|source| FileStoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            users = data.users.len(),
            sales = data.sales.len(),
            "Data file loaded"
        );
        Ok(data)
    }

    /// Write the dataset, replacing the file in one rename.
    ///
    /// # Errors
    ///
    /// Returns `FileStoreError::Io` if the temporary file cannot be written
    /// or moved into place.
    pub async fn save(&self, data: &Dataset) -> Result<(), FileStoreError> {
        let json = serde_json::to_vec_pretty(data).map_err(|source| FileStoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|source| FileStoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        tracing::debug!(path = %self.path.display(), bytes = json.len(), "Data file saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> FileStoreError {
        FileStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
