//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - An update DTO where the entity supports updates
//!
//! The nested [`mission::Mission`] aggregate is the exception: it is
//! assembled from flat [`mission::MissionRow`]s by the row reducer, not
//! mapped directly from a table.

pub mod cat;
pub mod mission;
pub mod target;
