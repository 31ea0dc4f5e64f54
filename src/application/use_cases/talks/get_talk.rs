//! Get Talk Use Case

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::domain::models::talk::{Talk, TalkId};
use crate::shared::errors::UseCaseError;

/// Use case for getting one talk of a camp
pub struct GetTalkUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl GetTalkUseCase {
    /// Create a new GetTalkUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the camp has no talk with this id.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, moniker: &str, talk_id: TalkId) -> Result<Talk, UseCaseError> {
        tracing::debug!(moniker, %talk_id, "Getting talk");

        self.camp_repository
            .get_talk(moniker, talk_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(moniker, %talk_id, "Talk not found");
                UseCaseError::NotFound {
                    resource: "Talk".to_string(),
                    id: format!("{moniker}/{talk_id}"),
                }
            })
    }
}
