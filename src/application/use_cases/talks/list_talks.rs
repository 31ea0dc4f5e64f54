//! List Talks Use Case

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::domain::models::talk::Talk;
use crate::shared::errors::UseCaseError;

/// Use case for listing the talks of a camp
pub struct ListTalksUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl ListTalksUseCase {
    /// Create a new ListTalksUseCase
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
    pub async fn execute(&self, moniker: &str) -> Result<Vec<Talk>, UseCaseError> {
        tracing::debug!(moniker, "Listing talks of camp");

        let talks = self
            .camp_repository
            .get_talks_by_moniker(moniker)
            .await?
            .ok_or_else(|| {
                tracing::warn!(moniker, "Camp not found for talk listing");
                UseCaseError::NotFound {
                    resource: "Camp".to_string(),
                    id: moniker.to_string(),
                }
            })?;

        tracing::debug!(moniker, count = talks.len(), "Found talks");
        Ok(talks)
    }
}
