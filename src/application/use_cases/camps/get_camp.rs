//! Get Camp Use Case
//!
//! Retrieves a single camp by moniker, always with its talks.

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::domain::models::camp::Camp;
use crate::shared::errors::UseCaseError;

/// Use case for getting a camp by moniker
pub struct GetCampUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl GetCampUseCase {
    /// Create a new GetCampUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no camp has this moniker.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, moniker: &str) -> Result<Camp, UseCaseError> {
        tracing::debug!(moniker, "Getting camp by moniker");

        let camp = self.camp_repository.get_camp(moniker, true).await?.ok_or_else(|| {
            tracing::warn!(moniker, "Camp not found");
            UseCaseError::NotFound {
                resource: "Camp".to_string(),
                id: moniker.to_string(),
            }
        })?;

        tracing::debug!(moniker, talks = camp.talks().len(), "Camp found");
        Ok(camp)
    }
}
