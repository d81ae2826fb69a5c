//! Cat entity model and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A cat row from the `cats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cat {
    pub id: DbId,
    pub name: String,
    pub years_experience: i16,
    /// Verified against the external breed registry at creation.
    pub breed: String,
    /// Salary in the smallest currency unit (e.g. 100 = 1$ in cents).
    pub salary: i64,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for hiring a new cat.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCat {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub years_experience: i16,
    #[validate(length(min = 1))]
    pub breed: String,
    #[serde(default)]
    pub salary: i64,
}

/// DTO for the salary update. Salary is the only mutable cat field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCat {
    pub salary: i64,
}
