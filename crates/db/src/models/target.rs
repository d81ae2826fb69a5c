//! Target entity model and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A target row from the `targets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Target {
    pub id: DbId,
    pub mission_id: DbId,
    pub name: String,
    pub country: String,
    pub notes: String,
    pub is_completed: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a target supplied at mission creation or added to an open
/// mission later.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateTarget {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[serde(default)]
    pub notes: String,
}

/// DTO for the notes update. Notes are the only mutable target field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTarget {
    #[serde(default)]
    pub notes: String,
}
