//! Repository for the `missions` table and the nested mission reads.

use async_trait::async_trait;
use spycat_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::mission::{Mission, MissionRow};
use crate::store::MissionStore;
use crate::PgTransaction;

/// The flat outer join consumed by [`Mission::from_rows`]. Soft-deleted
/// cats and targets are filtered in the join conditions so they never
/// surface as nested children.
const MISSION_JOIN: &str = "SELECT
    m.id, m.created_at, m.updated_at, m.deleted_at,
    m.cat_id, m.is_completed,
    c.id AS cat_row_id, c.created_at AS cat_created_at,
    c.updated_at AS cat_updated_at, c.deleted_at AS cat_deleted_at,
    c.name AS cat_name, c.years_experience AS cat_years_experience,
    c.breed AS cat_breed, c.salary AS cat_salary,
    t.id AS target_row_id, t.created_at AS target_created_at,
    t.updated_at AS target_updated_at, t.deleted_at AS target_deleted_at,
    t.mission_id AS target_mission_id, t.name AS target_name,
    t.country AS target_country, t.notes AS target_notes,
    t.is_completed AS target_is_completed
 FROM missions m
 LEFT JOIN cats c ON m.cat_id = c.id AND c.deleted_at IS NULL
 LEFT JOIN targets t ON m.id = t.mission_id AND t.deleted_at IS NULL";

/// Bare missions-table row, for writes that RETURN the new state.
#[derive(FromRow)]
struct BareMission {
    id: DbId,
    cat_id: Option<DbId>,
    is_completed: bool,
    deleted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<BareMission> for Mission {
    fn from(row: BareMission) -> Self {
        Mission {
            id: row.id,
            cat_id: row.cat_id,
            is_completed: row.is_completed,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            cat: None,
            targets: Vec::new(),
        }
    }
}

/// Postgres-backed [`MissionStore`].
pub struct MissionRepo {
    pool: PgPool,
}

impl MissionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionStore for MissionRepo {
    async fn begin(&self) -> Result<PgTransaction, sqlx::Error> {
        self.pool.begin().await
    }

    /// Insert a mission row inside the create-pipeline transaction. The
    /// target rows arrive separately via the target store.
    async fn insert(
        &self,
        tx: &mut PgTransaction,
        cat_id: Option<DbId>,
    ) -> Result<Mission, sqlx::Error> {
        let row = sqlx::query_as::<_, BareMission>(
            "INSERT INTO missions (cat_id)
             VALUES ($1)
             RETURNING id, cat_id, is_completed, deleted_at, created_at, updated_at",
        )
        .bind(cat_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(row.into())
    }

    /// All live missions as nested aggregates, newest first, targets
    /// ordered by id within each mission.
    async fn find_all(&self) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!(
            "{MISSION_JOIN}
             WHERE m.deleted_at IS NULL
             ORDER BY m.created_at DESC, m.id DESC, t.id ASC"
        );
        let rows = sqlx::query_as::<_, MissionRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(Mission::from_rows(rows))
    }

    /// Find one live mission as a nested aggregate.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!(
            "{MISSION_JOIN}
             WHERE m.id = $1 AND m.deleted_at IS NULL
             ORDER BY t.id ASC"
        );
        let rows = sqlx::query_as::<_, MissionRow>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(Mission::from_rows(rows).into_iter().next())
    }

    async fn assign_cat(&self, mission_id: DbId, cat_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE missions SET cat_id = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(mission_id)
        .bind(cat_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Unconditional completion write. A statement matching no live row
    /// is not an error.
    async fn complete(&self, mission_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE missions SET is_completed = true, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(mission_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Soft-delete a mission by id. Returns `true` if a row was marked
    /// deleted.
    async fn soft_delete(&self, mission_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE missions SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(mission_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
