//! Search Camps By Date Use Case
//!
//! Finds the camps held on a given date. Unlike listing, an empty result is
//! reported as not found.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::gateways::CampRepository;
use crate::domain::models::camp::Camp;
use crate::shared::errors::UseCaseError;

/// Use case for searching camps by event date
pub struct SearchCampsByDateUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl SearchCampsByDateUseCase {
    /// Create a new SearchCampsByDateUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no camp takes place on that date.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, event_date: NaiveDate, include_talks: bool) -> Result<Vec<Camp>, UseCaseError> {
        tracing::debug!(%event_date, include_talks, "Searching camps by event date");

        let camps = self
            .camp_repository
            .get_camps_by_event_date(event_date, include_talks)
            .await?;

        if camps.is_empty() {
            tracing::warn!(%event_date, "No camps on event date");
            return Err(UseCaseError::NotFound {
                resource: "Camps on event date".to_string(),
                id: event_date.to_string(),
            });
        }

        tracing::debug!(%event_date, count = camps.len(), "Found camps on event date");
        Ok(camps)
    }
}
