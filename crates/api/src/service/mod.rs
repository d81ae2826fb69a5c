//! Lifecycle services enforcing the agency's business rules.
//!
//! Services hold only their injected collaborators (store traits and the
//! breed validator) and are constructed once at startup. Precondition
//! checks are read-modify-write sequences, not atomic statements: two
//! callers racing the same mission can both pass a check, and the last
//! write wins. That contention profile is accepted; the one transaction
//! in the subsystem is the mission create pipeline.

mod cat;
mod mission;

pub use cat::CatService;
pub use mission::MissionService;
