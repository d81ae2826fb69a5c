//! HTTP handlers. Thin by design: extract, validate, call the service,
//! wrap the result in the response envelope.

pub mod cat;
pub mod mission;
