//! Update Camp Use Case (PUT with merge semantics)
//!
//! Loads a camp by moniker, merges the provided fields onto it and stores it.

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::domain::models::camp::{Camp, UpdateCampData};
use crate::shared::errors::{UseCaseError, DATABASE_FAILURE};

/// Use case for updating a camp
pub struct UpdateCampUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl UpdateCampUseCase {
    /// Create a new UpdateCampUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no camp has this moniker.
    /// Returns `UseCaseError::SaveNotAcknowledged` if storage wrote nothing.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, moniker: &str, data: UpdateCampData) -> Result<Camp, UseCaseError> {
        tracing::info!(moniker, "Updating camp");

        let existing = self.camp_repository.get_camp(moniker, false).await?.ok_or_else(|| {
            tracing::warn!(moniker, "Camp not found for update");
            UseCaseError::NotFound {
                resource: "Camp".to_string(),
                id: moniker.to_string(),
            }
        })?;

        let updated = existing.with_updates(data);

        let saved = self.camp_repository.update_camp(&updated).await?.ok_or_else(|| {
            tracing::warn!(moniker, "Camp update was not saved");
            UseCaseError::SaveNotAcknowledged(DATABASE_FAILURE.to_string())
        })?;

        tracing::info!(moniker, new_moniker = saved.moniker(), "Camp updated successfully");
        Ok(saved)
    }
}
