//! Create Camp Use Case
//!
//! Stores a new camp.

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::domain::models::camp::{Camp, CreateCampData};
use crate::shared::errors::{UseCaseError, DATABASE_FAILURE};

/// Use case for creating a new camp
pub struct CreateCampUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl CreateCampUseCase {
    /// Create a new CreateCampUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case. The data is expected to be validated already.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::SaveNotAcknowledged` if storage wrote nothing
    /// (for instance because the moniker is taken).
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateCampData) -> Result<Camp, UseCaseError> {
        tracing::info!(moniker = %data.moniker, name = %data.name, "Creating new camp");

        let created = self.camp_repository.add_camp(&data).await?.ok_or_else(|| {
            tracing::warn!(moniker = %data.moniker, "Camp was not saved");
            UseCaseError::SaveNotAcknowledged(DATABASE_FAILURE.to_string())
        })?;

        tracing::info!(
            camp_id = %created.id(),
            moniker = created.moniker(),
            "Camp created successfully"
        );

        Ok(created)
    }
}
