//! Mission aggregate, flat join row, and the row reducer.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::cat::Cat;
use crate::models::target::{CreateTarget, Target};

/// A mission with its nested cat (when assigned) and ordered targets.
///
/// Assembled from [`MissionRow`]s by [`Mission::from_rows`]; the row
/// type, not this one, maps the database columns.
#[derive(Debug, Clone, Serialize)]
pub struct Mission {
    pub id: DbId,
    /// Null while unassigned. Assignment is a one-time operation; there
    /// is no unassign path.
    pub cat_id: Option<DbId>,
    pub is_completed: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub cat: Option<Cat>,
    pub targets: Vec<Target>,
}

/// One row of the missions/cats/targets outer join.
///
/// Cat columns are null when the mission has no assigned cat; target
/// columns are null when the mission currently has zero live targets.
/// With 1..3 targets and at most one cat, a mission spans one row per
/// live target (or a single all-null-target row).
#[derive(Debug, Clone, FromRow)]
pub struct MissionRow {
    pub id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub cat_id: Option<DbId>,
    pub is_completed: bool,

    pub cat_row_id: Option<DbId>,
    pub cat_created_at: Option<Timestamp>,
    pub cat_updated_at: Option<Timestamp>,
    pub cat_deleted_at: Option<Timestamp>,
    pub cat_name: Option<String>,
    pub cat_years_experience: Option<i16>,
    pub cat_breed: Option<String>,
    pub cat_salary: Option<i64>,

    pub target_row_id: Option<DbId>,
    pub target_created_at: Option<Timestamp>,
    pub target_updated_at: Option<Timestamp>,
    pub target_deleted_at: Option<Timestamp>,
    pub target_mission_id: Option<DbId>,
    pub target_name: Option<String>,
    pub target_country: Option<String>,
    pub target_notes: Option<String>,
    pub target_is_completed: Option<bool>,
}

/// DTO for creating a mission together with its initial targets.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMission {
    pub cat_id: Option<DbId>,
    #[validate(length(min = 1, max = 3), nested)]
    pub targets: Vec<CreateTarget>,
}

impl MissionRow {
    /// Materialize the nested cat, if the cat columns are present.
    fn cat(&self) -> Option<Cat> {
        let id = self.cat_row_id?;
        Some(Cat {
            id,
            name: self.cat_name.clone().unwrap_or_default(),
            years_experience: self.cat_years_experience.unwrap_or_default(),
            breed: self.cat_breed.clone().unwrap_or_default(),
            salary: self.cat_salary.unwrap_or_default(),
            deleted_at: self.cat_deleted_at,
            created_at: self.cat_created_at.unwrap_or_default(),
            updated_at: self.cat_updated_at.unwrap_or_default(),
        })
    }

    /// Materialize this row's target, if the target columns are present.
    fn target(&self) -> Option<Target> {
        let id = self.target_row_id?;
        Some(Target {
            id,
            mission_id: self.target_mission_id.unwrap_or_default(),
            name: self.target_name.clone().unwrap_or_default(),
            country: self.target_country.clone().unwrap_or_default(),
            notes: self.target_notes.clone().unwrap_or_default(),
            is_completed: self.target_is_completed.unwrap_or_default(),
            deleted_at: self.target_deleted_at,
            created_at: self.target_created_at.unwrap_or_default(),
            updated_at: self.target_updated_at.unwrap_or_default(),
        })
    }
}

impl Mission {
    /// Reduce an ordered flat join result into mission aggregates.
    ///
    /// Missions are emitted in first-seen row order, so the query's sort
    /// (`created_at DESC, t.id ASC`) carries through: newest mission
    /// first, targets ordered by id within each mission. The cat is
    /// taken from the first row of a mission; every row with a non-null
    /// target id contributes one target.
    pub fn from_rows(rows: Vec<MissionRow>) -> Vec<Mission> {
        let mut by_id: HashMap<DbId, Mission> = HashMap::with_capacity(rows.len());
        let mut order: Vec<DbId> = Vec::new();

        for row in rows {
            if let Entry::Vacant(slot) = by_id.entry(row.id) {
                order.push(row.id);
                slot.insert(Mission {
                    id: row.id,
                    cat_id: row.cat_id,
                    is_completed: row.is_completed,
                    deleted_at: row.deleted_at,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                    cat: row.cat(),
                    targets: Vec::new(),
                });
            }

            if let Some(target) = row.target() {
                if let Some(mission) = by_id.get_mut(&row.id) {
                    mission.targets.push(target);
                }
            }
        }

        order
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect()
    }
}
