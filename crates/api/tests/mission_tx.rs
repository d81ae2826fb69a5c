//! Service-level tests for the transactional mission create pipeline.
//!
//! The all-or-nothing property is exercised by decorating the real
//! target repository with a store that fails the last insert of the
//! initial target set after the earlier rows were written inside the
//! transaction.

use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use sqlx::PgPool;

use spycat_api::error::AppError;
use spycat_api::service::MissionService;
use spycat_core::error::CoreError;
use spycat_core::types::DbId;
use spycat_db::models::mission::CreateMission;
use spycat_db::models::target::{CreateTarget, Target};
use spycat_db::repositories::{CatRepo, MissionRepo, TargetRepo};
use spycat_db::store::{CatStore, MissionStore, TargetStore};
use spycat_db::PgTransaction;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_target(name: &str) -> CreateTarget {
    CreateTarget {
        name: name.to_string(),
        country: "NO".to_string(),
        notes: String::new(),
    }
}

fn new_mission(target_names: &[&str]) -> CreateMission {
    CreateMission {
        cat_id: None,
        targets: target_names.iter().map(|n| new_target(n)).collect(),
    }
}

fn service(pool: &PgPool, targets: Arc<dyn TargetStore>) -> MissionService {
    let missions: Arc<dyn MissionStore> = Arc::new(MissionRepo::new(pool.clone()));
    let cats: Arc<dyn CatStore> = Arc::new(CatRepo::new(pool.clone()));
    MissionService::new(missions, targets, cats)
}

async fn table_counts(pool: &PgPool) -> (i64, i64) {
    let (missions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM missions")
        .fetch_one(pool)
        .await
        .unwrap();
    let (targets,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM targets")
        .fetch_one(pool)
        .await
        .unwrap();
    (missions, targets)
}

/// Delegates to the real repository, but fails the last insert of the
/// initial target set after the earlier rows have been written.
struct FailOnLastTargetInsert {
    inner: TargetRepo,
}

#[async_trait]
impl TargetStore for FailOnLastTargetInsert {
    async fn find_by_id(
        &self,
        target_id: DbId,
        mission_id: DbId,
    ) -> Result<Option<Target>, sqlx::Error> {
        self.inner.find_by_id(target_id, mission_id).await
    }

    async fn insert(&self, mission_id: DbId, input: &CreateTarget) -> Result<Target, sqlx::Error> {
        self.inner.insert(mission_id, input).await
    }

    async fn insert_many(
        &self,
        tx: &mut PgTransaction,
        mission_id: DbId,
        targets: &[CreateTarget],
    ) -> Result<Vec<Target>, sqlx::Error> {
        let (_, head) = targets.split_last().expect("at least one target");
        self.inner.insert_many(tx, mission_id, head).await?;
        Err(sqlx::Error::Protocol(
            "injected failure on last target insert".into(),
        ))
    }

    async fn update_notes(
        &self,
        target_id: DbId,
        mission_id: DbId,
        notes: &str,
    ) -> Result<(), sqlx::Error> {
        self.inner.update_notes(target_id, mission_id, notes).await
    }

    async fn complete(&self, target_id: DbId, mission_id: DbId) -> Result<(), sqlx::Error> {
        self.inner.complete(target_id, mission_id).await
    }

    async fn soft_delete(&self, target_id: DbId, mission_id: DbId) -> Result<bool, sqlx::Error> {
        self.inner.soft_delete(target_id, mission_id).await
    }
}

// ---------------------------------------------------------------------------
// Test: baseline commit persists mission plus all targets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pipeline_commits_mission_and_targets(pool: PgPool) {
    let svc = service(&pool, Arc::new(TargetRepo::new(pool.clone())));

    let mission = svc
        .create_mission(&new_mission(&["a", "b"]))
        .await
        .unwrap();

    assert_eq!(mission.targets.len(), 2);
    assert_eq!(table_counts(&pool).await, (1, 2));
}

// ---------------------------------------------------------------------------
// Test: failure on the last target insert rolls back everything
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failure_on_last_target_insert_leaves_no_rows(pool: PgPool) {
    let svc = service(
        &pool,
        Arc::new(FailOnLastTargetInsert {
            inner: TargetRepo::new(pool.clone()),
        }),
    );

    let err = svc
        .create_mission(&new_mission(&["a", "b", "c"]))
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Database(_));

    // Nothing is visible: not the mission row, not the targets written
    // before the injected failure.
    assert_eq!(table_counts(&pool).await, (0, 0));
}

// ---------------------------------------------------------------------------
// Test: out-of-range target counts are rejected before any write
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_targets_rejected_before_any_write(pool: PgPool) {
    let svc = service(&pool, Arc::new(TargetRepo::new(pool.clone())));

    let err = svc.create_mission(&new_mission(&[])).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));

    assert_eq!(table_counts(&pool).await, (0, 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_four_targets_rejected_before_any_write(pool: PgPool) {
    let svc = service(&pool, Arc::new(TargetRepo::new(pool.clone())));

    let err = svc
        .create_mission(&new_mission(&["a", "b", "c", "d"]))
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));

    assert_eq!(table_counts(&pool).await, (0, 0));
}
