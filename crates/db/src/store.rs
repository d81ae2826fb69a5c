//! Named store interfaces implemented by the Postgres repositories.
//!
//! The lifecycle service receives these as trait objects, so rule checks
//! and the create pipeline run identically against the real repositories
//! or decorated test doubles. All methods return raw [`sqlx::Error`];
//! classification into domain outcomes happens in the service layer.

use async_trait::async_trait;
use spycat_core::types::DbId;

use crate::models::cat::{Cat, CreateCat};
use crate::models::mission::Mission;
use crate::models::target::{CreateTarget, Target};
use crate::PgTransaction;

#[async_trait]
pub trait CatStore: Send + Sync {
    /// List cats, optionally filtered to a single breed.
    async fn find_all(&self, breed: Option<&str>) -> Result<Vec<Cat>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Cat>, sqlx::Error>;

    async fn insert(&self, input: &CreateCat) -> Result<Cat, sqlx::Error>;

    async fn update_salary(&self, id: DbId, salary: i64) -> Result<(), sqlx::Error>;

    /// Returns `true` if a live row was marked deleted.
    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

#[async_trait]
pub trait MissionStore: Send + Sync {
    /// Open the transaction that scopes the mission create pipeline.
    async fn begin(&self) -> Result<PgTransaction, sqlx::Error>;

    /// Insert a mission row inside the create-pipeline transaction.
    async fn insert(
        &self,
        tx: &mut PgTransaction,
        cat_id: Option<DbId>,
    ) -> Result<Mission, sqlx::Error>;

    /// All live missions as nested aggregates, newest first.
    async fn find_all(&self) -> Result<Vec<Mission>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Mission>, sqlx::Error>;

    async fn assign_cat(&self, mission_id: DbId, cat_id: DbId) -> Result<(), sqlx::Error>;

    /// Unconditional completion write; absent rows are silently skipped.
    async fn complete(&self, mission_id: DbId) -> Result<(), sqlx::Error>;

    /// Returns `true` if a live row was marked deleted.
    async fn soft_delete(&self, mission_id: DbId) -> Result<bool, sqlx::Error>;
}

#[async_trait]
pub trait TargetStore: Send + Sync {
    /// Point lookup scoped to the owning mission.
    async fn find_by_id(
        &self,
        target_id: DbId,
        mission_id: DbId,
    ) -> Result<Option<Target>, sqlx::Error>;

    async fn insert(&self, mission_id: DbId, input: &CreateTarget) -> Result<Target, sqlx::Error>;

    /// Insert the initial target set inside the create-pipeline
    /// transaction, in input order.
    async fn insert_many(
        &self,
        tx: &mut PgTransaction,
        mission_id: DbId,
        targets: &[CreateTarget],
    ) -> Result<Vec<Target>, sqlx::Error>;

    async fn update_notes(
        &self,
        target_id: DbId,
        mission_id: DbId,
        notes: &str,
    ) -> Result<(), sqlx::Error>;

    /// Unconditional completion write; absent rows are silently skipped.
    async fn complete(&self, target_id: DbId, mission_id: DbId) -> Result<(), sqlx::Error>;

    /// Returns `true` if a live row was marked deleted.
    async fn soft_delete(&self, target_id: DbId, mission_id: DbId) -> Result<bool, sqlx::Error>;
}
