//! List Camps Use Case
//!
//! Retrieves every camp, optionally with its talks.

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::domain::models::camp::Camp;
use crate::shared::errors::UseCaseError;

/// Use case for listing all camps
pub struct ListCampsUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl ListCampsUseCase {
    /// Create a new ListCampsUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case. An empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, include_talks: bool) -> Result<Vec<Camp>, UseCaseError> {
        tracing::debug!(include_talks, "Listing camps");

        let camps = self.camp_repository.get_all_camps(include_talks).await?;

        tracing::debug!(count = camps.len(), "Found camps");
        Ok(camps)
    }
}
