//! Delete Camp Use Case
//!
//! Deletes a camp and, through storage, its talks.

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::shared::errors::{UseCaseError, DATABASE_FAILURE};

/// Use case for deleting a camp
pub struct DeleteCampUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl DeleteCampUseCase {
    /// Create a new DeleteCampUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no camp has this moniker.
    /// Returns `UseCaseError::SaveNotAcknowledged` if storage deleted nothing.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, moniker: &str) -> Result<(), UseCaseError> {
        tracing::info!(moniker, "Deleting camp");

        let existing = self.camp_repository.get_camp(moniker, false).await?.ok_or_else(|| {
            tracing::warn!(moniker, "Camp not found for deletion");
            UseCaseError::NotFound {
                resource: "Camp".to_string(),
                id: moniker.to_string(),
            }
        })?;

        if !self.camp_repository.delete_camp(&existing).await? {
            tracing::warn!(moniker, "Camp deletion was not saved");
            return Err(UseCaseError::SaveNotAcknowledged(DATABASE_FAILURE.to_string()));
        }

        tracing::info!(moniker, "Camp deleted successfully");
        Ok(())
    }
}
