use async_trait::async_trait;
use thiserror::Error;

use crate::models::TaxFormData;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Key-value persistence for tax form records, keyed by client id.
///
/// One record per client; writes are last-write-wins. `save` stamps
/// `updated_at` (and `created_at` on first insert) — the computation core
/// never touches timestamps.
#[async_trait]
pub trait TaxFormRepository: Send + Sync {
    async fn get_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Option<TaxFormData>, RepositoryError>;

    /// Upsert keyed by `client_id`. Returns the record as stored, with
    /// fresh timestamps.
    async fn save(&self, form: &TaxFormData) -> Result<TaxFormData, RepositoryError>;

    /// Returns the stored record, or persists and returns a
    /// statutory-defaults-initialised empty one on first access.
    async fn get_or_create(
        &self,
        client_id: &str,
        financial_year: &str,
        accounting_year: &str,
    ) -> Result<TaxFormData, RepositoryError>;

    /// Admin "reset": removes the client's record entirely.
    async fn delete(&self, client_id: &str) -> Result<(), RepositoryError>;

    async fn list_client_ids(&self) -> Result<Vec<String>, RepositoryError>;
}
