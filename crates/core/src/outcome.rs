//! Numeric service outcome codes.
//!
//! Every API response carries one of these codes next to the transport
//! status. Codes 2, 5 and 7 exist in the wire contract but are never
//! emitted by this service.

use serde::{Serialize, Serializer};

use crate::error::CoreError;

/// Service-level classification of an operation's result, independent of
/// any transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Outcome {
    Ok = 0,
    BadRequest = 1,
    DatabaseError = 3,
    NotFound = 4,
    Forbidden = 6,
    ExternalRequestFail = 8,
}

impl Outcome {
    /// The numeric wire value.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl From<&CoreError> for Outcome {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => Outcome::NotFound,
            CoreError::Validation(_) => Outcome::BadRequest,
            CoreError::Forbidden(_) => Outcome::Forbidden,
        }
    }
}
