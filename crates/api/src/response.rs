//! Shared response envelope for API handlers.
//!
//! Every response carries `{ "code": <numeric outcome>, "data": {…}?,
//! "message": "…"? }`. Use [`Envelope`] instead of ad-hoc
//! `serde_json::json!` maps so the outcome code is always present and
//! consistently serialized.

use serde::Serialize;
use serde_json::{Map, Value};
use spycat_core::outcome::Outcome;

/// Standard response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok().key("mission", &mission).message("mission created")))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub code: Outcome,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// An empty envelope with the given outcome code.
    pub fn new(code: Outcome) -> Self {
        Self {
            code,
            data: Map::new(),
            message: None,
        }
    }

    /// An empty success envelope.
    pub fn ok() -> Self {
        Self::new(Outcome::Ok)
    }

    /// An error envelope with the given code and message.
    pub fn error(code: Outcome, message: impl Into<String>) -> Self {
        Self::new(code).message(message)
    }

    /// Add a key to the data payload.
    ///
    /// Domain types serialize infallibly; a value that does not is
    /// dropped rather than poisoning the whole response.
    pub fn key<T: Serialize>(mut self, key: &str, value: &T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.data.insert(key.to_string(), value);
        }
        self
    }

    /// Set the human-readable message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
