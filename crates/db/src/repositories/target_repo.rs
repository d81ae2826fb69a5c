//! Repository for the `targets` table.
//!
//! Every statement is scoped to the owning mission: a target id on its
//! own never identifies a row here.

use async_trait::async_trait;
use spycat_core::types::DbId;
use sqlx::PgPool;

use crate::models::target::{CreateTarget, Target};
use crate::store::TargetStore;
use crate::PgTransaction;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, mission_id, name, country, notes, is_completed, deleted_at, created_at, updated_at";

/// Postgres-backed [`TargetStore`].
pub struct TargetRepo {
    pool: PgPool,
}

impl TargetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TargetStore for TargetRepo {
    /// Find a target by id within its mission. Excludes soft-deleted
    /// rows.
    async fn find_by_id(
        &self,
        target_id: DbId,
        mission_id: DbId,
    ) -> Result<Option<Target>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM targets
             WHERE id = $1 AND mission_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(target_id)
            .bind(mission_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a single target into an existing mission, returning the
    /// created row.
    async fn insert(&self, mission_id: DbId, input: &CreateTarget) -> Result<Target, sqlx::Error> {
        let query = format!(
            "INSERT INTO targets (mission_id, name, country, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.notes)
            .fetch_one(&self.pool)
            .await
    }

    /// Insert the initial target set inside the create-pipeline
    /// transaction. Rows are created in input order, so ids ascend with
    /// the caller's ordering.
    async fn insert_many(
        &self,
        tx: &mut PgTransaction,
        mission_id: DbId,
        targets: &[CreateTarget],
    ) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!(
            "INSERT INTO targets (mission_id, name, country, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        let mut created = Vec::with_capacity(targets.len());
        for input in targets {
            let target = sqlx::query_as::<_, Target>(&query)
                .bind(mission_id)
                .bind(&input.name)
                .bind(&input.country)
                .bind(&input.notes)
                .fetch_one(&mut **tx)
                .await?;
            created.push(target);
        }
        Ok(created)
    }

    /// Replace a target's notes. A statement matching no live row is not
    /// an error.
    async fn update_notes(
        &self,
        target_id: DbId,
        mission_id: DbId,
        notes: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE targets SET notes = $3, updated_at = NOW()
             WHERE id = $1 AND mission_id = $2 AND deleted_at IS NULL",
        )
        .bind(target_id)
        .bind(mission_id)
        .bind(notes)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Unconditional completion write. A statement matching no live row
    /// is not an error.
    async fn complete(&self, target_id: DbId, mission_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE targets SET is_completed = true, updated_at = NOW()
             WHERE id = $1 AND mission_id = $2 AND deleted_at IS NULL",
        )
        .bind(target_id)
        .bind(mission_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Soft-delete a target within its mission. Returns `true` if a row
    /// was marked deleted.
    async fn soft_delete(&self, target_id: DbId, mission_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE targets SET deleted_at = NOW()
             WHERE id = $1 AND mission_id = $2 AND deleted_at IS NULL",
        )
        .bind(target_id)
        .bind(mission_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
