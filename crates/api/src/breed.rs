//! Breed verification against TheCatAPI.
//!
//! Called once per cat creation. A verification error blocks the hire
//! with an external-request-fail outcome; an unknown breed blocks it
//! with a bad-request outcome.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

/// Default base URL for TheCatAPI.
pub const DEFAULT_CAT_API_BASE: &str = "https://api.thecatapi.com/v1";

/// Errors from the breed verification layer.
#[derive(Debug, thiserror::Error)]
pub enum BreedApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// TheCatAPI returned a non-2xx status code.
    #[error("TheCatAPI responded with status {status}")]
    ApiError {
        /// HTTP status code.
        status: u16,
    },
}

/// Verifies breed names against an external registry.
#[async_trait]
pub trait BreedValidator: Send + Sync {
    /// Returns `true` if the name matches a known breed.
    async fn is_valid(&self, breed: &str) -> Result<bool, BreedApiError>;
}

/// One breed entry from the `/breeds/search` response. Remaining fields
/// of the payload are ignored.
#[derive(Debug, Deserialize)]
struct BreedEntry {
    name: String,
}

/// HTTP client for the TheCatAPI breed search endpoint.
pub struct TheCatApi {
    client: reqwest::Client,
    api_base: String,
}

impl TheCatApi {
    /// Create a client against the given API base, e.g.
    /// `https://api.thecatapi.com/v1`.
    ///
    /// Panics if the HTTP client cannot be constructed, which with these
    /// static options only happens on broken TLS setups -- startup is
    /// the right place to find that out.
    pub fn new(api_base: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .expect("failed to construct HTTP client"),
            api_base,
        }
    }
}

#[async_trait]
impl BreedValidator for TheCatApi {
    /// Matches the breed name case-insensitively against the search
    /// results.
    async fn is_valid(&self, breed: &str) -> Result<bool, BreedApiError> {
        let response = self
            .client
            .get(format!("{}/breeds/search", self.api_base))
            .query(&[("q", breed)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BreedApiError::ApiError {
                status: response.status().as_u16(),
            });
        }

        let entries: Vec<BreedEntry> = response.json().await?;
        Ok(entries.iter().any(|b| b.name.eq_ignore_ascii_case(breed)))
    }
}
