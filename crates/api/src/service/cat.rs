//! Cat lifecycle: hiring (with external breed verification), salary
//! updates, and retirement.

use std::sync::Arc;

use spycat_core::error::CoreError;
use spycat_core::types::DbId;
use spycat_db::models::cat::{Cat, CreateCat};
use spycat_db::store::CatStore;

use crate::breed::BreedValidator;
use crate::error::{AppError, AppResult};

pub struct CatService {
    cats: Arc<dyn CatStore>,
    breeds: Arc<dyn BreedValidator>,
}

impl CatService {
    pub fn new(cats: Arc<dyn CatStore>, breeds: Arc<dyn BreedValidator>) -> Self {
        Self { cats, breeds }
    }

    /// List cats, optionally filtered to a single breed.
    pub async fn list(&self, breed: Option<&str>) -> AppResult<Vec<Cat>> {
        Ok(self.cats.find_all(breed).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Cat> {
        self.cats
            .find_by_id(id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "cat", id }))
    }

    /// Hire a new cat.
    ///
    /// The breed is verified against the external registry first; an
    /// unreachable registry blocks the hire as external-request-fail, an
    /// unknown breed as bad-request.
    pub async fn create(&self, input: &CreateCat) -> AppResult<Cat> {
        let valid = self.breeds.is_valid(&input.breed).await.map_err(|err| {
            tracing::error!(breed = %input.breed, error = %err, "breed verification failed");
            AppError::Breed(err)
        })?;
        if !valid {
            return Err(AppError::BadRequest(format!(
                "invalid breed: {}",
                input.breed
            )));
        }

        Ok(self.cats.insert(input).await?)
    }

    /// Set a cat's salary, the only mutable cat field.
    ///
    /// Mirrors the storage write directly: no existence precondition, so
    /// an absent cat is observably a no-op.
    pub async fn update_salary(&self, id: DbId, salary: i64) -> AppResult<()> {
        Ok(self.cats.update_salary(id, salary).await?)
    }

    /// Retire a cat (soft-delete). Same no-precondition pattern as the
    /// salary update.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.cats.soft_delete(id).await?;
        Ok(())
    }
}
