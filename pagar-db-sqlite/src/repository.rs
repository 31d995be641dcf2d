use async_trait::async_trait;
use chrono::Utc;
use pagar_core::{RepositoryError, TaxFormData, TaxFormRepository};
use sqlx::sqlite::SqlitePool;
use tracing::debug;

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn to_payload(form: &TaxFormData) -> Result<String, RepositoryError> {
    serde_json::to_string(form).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn from_payload(payload: &str) -> Result<TaxFormData, RepositoryError> {
    serde_json::from_str(payload).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

#[async_trait]
impl TaxFormRepository for SqliteRepository {
    async fn get_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Option<TaxFormData>, RepositoryError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT payload FROM tax_forms WHERE client_id = ?")
                .bind(client_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(|(payload,)| from_payload(&payload)).transpose()
    }

    async fn save(&self, form: &TaxFormData) -> Result<TaxFormData, RepositoryError> {
        let mut stored = form.clone();
        stored.updated_at = Utc::now();

        let payload = to_payload(&stored)?;

        sqlx::query(
            "INSERT INTO tax_forms (client_id, payload, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(client_id) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at",
        )
        .bind(&stored.client_id)
        .bind(&payload)
        .bind(stored.created_at.to_rfc3339())
        .bind(stored.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        debug!(client_id = %stored.client_id, "saved tax form");
        Ok(stored)
    }

    async fn get_or_create(
        &self,
        client_id: &str,
        financial_year: &str,
        accounting_year: &str,
    ) -> Result<TaxFormData, RepositoryError> {
        if let Some(existing) = self.get_by_client_id(client_id).await? {
            return Ok(existing);
        }

        let empty = TaxFormData::empty(client_id, financial_year, accounting_year);
        self.save(&empty).await
    }

    async fn delete(&self, client_id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tax_forms WHERE client_id = ?")
            .bind(client_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn list_client_ids(&self) -> Result<Vec<String>, RepositoryError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT client_id FROM tax_forms ORDER BY client_id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
