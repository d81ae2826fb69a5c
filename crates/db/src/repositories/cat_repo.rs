//! Repository for the `cats` table.

use async_trait::async_trait;
use spycat_core::types::DbId;
use sqlx::PgPool;

use crate::models::cat::{Cat, CreateCat};
use crate::store::CatStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, years_experience, breed, salary, deleted_at, created_at, updated_at";

/// Postgres-backed [`CatStore`].
pub struct CatRepo {
    pool: PgPool,
}

impl CatRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatStore for CatRepo {
    /// List cats, optionally filtered by breed, ordered by id ascending.
    /// Excludes soft-deleted rows.
    async fn find_all(&self, breed: Option<&str>) -> Result<Vec<Cat>, sqlx::Error> {
        match breed {
            Some(breed) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM cats
                     WHERE deleted_at IS NULL AND breed = $1
                     ORDER BY id ASC"
                );
                sqlx::query_as::<_, Cat>(&query)
                    .bind(breed)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM cats
                     WHERE deleted_at IS NULL
                     ORDER BY id ASC"
                );
                sqlx::query_as::<_, Cat>(&query).fetch_all(&self.pool).await
            }
        }
    }

    /// Find a cat by id. Excludes soft-deleted rows.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cats WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a new cat, returning the created row.
    async fn insert(&self, input: &CreateCat) -> Result<Cat, sqlx::Error> {
        let query = format!(
            "INSERT INTO cats (name, years_experience, breed, salary)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(&input.name)
            .bind(input.years_experience)
            .bind(&input.breed)
            .bind(input.salary)
            .fetch_one(&self.pool)
            .await
    }

    /// Set a cat's salary. A statement matching no live row is not an
    /// error.
    async fn update_salary(&self, id: DbId, salary: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE cats SET salary = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(salary)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Soft-delete a cat by id. Returns `true` if a row was marked
    /// deleted.
    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cats SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
