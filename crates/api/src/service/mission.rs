//! Mission/target lifecycle rules and the transactional create pipeline.

use std::sync::Arc;

use spycat_core::error::CoreError;
use spycat_core::rules;
use spycat_core::types::DbId;
use spycat_db::models::mission::{CreateMission, Mission};
use spycat_db::models::target::{CreateTarget, Target};
use spycat_db::store::{CatStore, MissionStore, TargetStore};

use crate::error::{AppError, AppResult};

pub struct MissionService {
    missions: Arc<dyn MissionStore>,
    targets: Arc<dyn TargetStore>,
    cats: Arc<dyn CatStore>,
}

fn mission_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "mission",
        id,
    })
}

fn target_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "target",
        id,
    })
}

fn forbidden(reason: &str) -> AppError {
    AppError::Core(CoreError::Forbidden(reason.to_string()))
}

impl MissionService {
    pub fn new(
        missions: Arc<dyn MissionStore>,
        targets: Arc<dyn TargetStore>,
        cats: Arc<dyn CatStore>,
    ) -> Self {
        Self {
            missions,
            targets,
            cats,
        }
    }

    /// All live missions as nested aggregates, newest first.
    pub async fn list(&self) -> AppResult<Vec<Mission>> {
        Ok(self.missions.find_all().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Mission> {
        self.missions
            .find_by_id(id)
            .await?
            .ok_or_else(|| mission_not_found(id))
    }

    /// Create a mission and its initial targets atomically.
    ///
    /// The target count is validated before any write. The cat-existence
    /// check (when a cat id is supplied) is a pool read ahead of the
    /// transaction; a cat vanishing between check and commit is an
    /// accepted race and surfaces as a constraint error. Every error
    /// path drops the transaction, rolling back the mission row, so a
    /// mission is never visible without its targets.
    pub async fn create_mission(&self, input: &CreateMission) -> AppResult<Mission> {
        rules::validate_target_count(input.targets.len())?;

        if let Some(cat_id) = input.cat_id {
            if self.cats.find_by_id(cat_id).await?.is_none() {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "cat",
                    id: cat_id,
                }));
            }
        }

        let mut tx = self.missions.begin().await?;
        let mut mission = self.missions.insert(&mut tx, input.cat_id).await?;

        mission.targets = self
            .targets
            .insert_many(&mut tx, mission.id, &input.targets)
            .await?;

        tx.commit().await?;
        Ok(mission)
    }

    /// Assign a cat to an unassigned mission. Assignment is one-time:
    /// there is no reassignment or detachment path.
    pub async fn assign_cat(&self, mission_id: DbId, cat_id: DbId) -> AppResult<()> {
        let mission = self.get(mission_id).await?;
        if mission.cat_id.is_some() {
            return Err(forbidden("mission has cat already assigned"));
        }

        if self.cats.find_by_id(cat_id).await?.is_none() {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "cat",
                id: cat_id,
            }));
        }

        Ok(self.missions.assign_cat(mission_id, cat_id).await?)
    }

    /// One-way mission completion.
    ///
    /// The write is unconditional: completing an absent, soft-deleted,
    /// or already-completed mission is observably a no-op, not an error.
    pub async fn complete_mission(&self, mission_id: DbId) -> AppResult<()> {
        Ok(self.missions.complete(mission_id).await?)
    }

    /// Soft-delete a mission, permitted only while it is unassigned.
    pub async fn delete_mission(&self, mission_id: DbId) -> AppResult<()> {
        let mission = self.get(mission_id).await?;
        if mission.cat_id.is_some() {
            return Err(forbidden("mission has cat already assigned"));
        }

        self.missions.soft_delete(mission_id).await?;
        Ok(())
    }

    /// Add a target to an open mission, subject to the target ceiling.
    pub async fn create_target(
        &self,
        mission_id: DbId,
        input: &CreateTarget,
    ) -> AppResult<Target> {
        let mission = self.get(mission_id).await?;
        if mission.is_completed {
            return Err(forbidden("mission already complete"));
        }
        if mission.targets.len() >= rules::MAX_MISSION_TARGETS {
            return Err(forbidden("mission already has max number of targets"));
        }

        Ok(self.targets.insert(mission_id, input).await?)
    }

    /// Update a target's notes, permitted only while both the mission
    /// and the target are open.
    pub async fn update_target(
        &self,
        target_id: DbId,
        mission_id: DbId,
        notes: &str,
    ) -> AppResult<()> {
        let mission = self.get(mission_id).await?;
        if mission.is_completed {
            return Err(forbidden("mission already complete"));
        }

        let target = self
            .targets
            .find_by_id(target_id, mission_id)
            .await?
            .ok_or_else(|| target_not_found(target_id))?;
        if target.is_completed {
            return Err(forbidden("target already complete"));
        }

        Ok(self
            .targets
            .update_notes(target_id, mission_id, notes)
            .await?)
    }

    /// One-way target completion scoped to the mission; same
    /// unconditional write pattern as mission completion.
    pub async fn complete_target(&self, target_id: DbId, mission_id: DbId) -> AppResult<()> {
        Ok(self.targets.complete(target_id, mission_id).await?)
    }

    /// Soft-delete a target, permitted while both the mission and the
    /// target are open. There is no lower-bound check: a mission may
    /// drop to zero live targets.
    pub async fn delete_target(&self, target_id: DbId, mission_id: DbId) -> AppResult<()> {
        let mission = self.get(mission_id).await?;
        if mission.is_completed {
            return Err(forbidden("mission already complete"));
        }

        let target = self
            .targets
            .find_by_id(target_id, mission_id)
            .await?
            .ok_or_else(|| target_not_found(target_id))?;
        if target.is_completed {
            return Err(forbidden("target already complete"));
        }

        self.targets.soft_delete(target_id, mission_id).await?;
        Ok(())
    }
}
