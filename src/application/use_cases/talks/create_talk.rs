//! Create Talk Use Case
//!
//! Creates a talk under a camp. The checks run in a fixed order and the
//! first one that fails decides the rejection:
//!
//! 1. the camp must exist,
//! 2. the request must name a speaker,
//! 3. that speaker must exist.

use std::sync::Arc;

use crate::domain::gateways::CampRepository;
use crate::domain::models::talk::{CreateTalkData, NewTalk, Talk};
use crate::shared::errors::UseCaseError;

/// Message reported when storage does not acknowledge the new talk
pub const TALK_SAVE_FAILED: &str = "Failed to save new Talk";

/// Use case for creating a talk
pub struct CreateTalkUseCase {
    camp_repository: Arc<dyn CampRepository>,
}

impl CreateTalkUseCase {
    /// Create a new CreateTalkUseCase
    #[must_use]
    pub fn new(camp_repository: Arc<dyn CampRepository>) -> Self {
        Self { camp_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::CampDoesNotExist` if no camp has this moniker.
    /// Returns `UseCaseError::SpeakerRequired` if no speaker id was given.
    /// Returns `UseCaseError::SpeakerNotFound` if the speaker id is unknown.
    /// Returns `UseCaseError::SaveNotAcknowledged` if storage wrote nothing.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, moniker: &str, data: CreateTalkData) -> Result<Talk, UseCaseError> {
        tracing::info!(moniker, title = %data.title, "Creating new talk");

        let camp = self.camp_repository.get_camp(moniker, false).await?.ok_or_else(|| {
            tracing::warn!(moniker, "Cannot create talk: camp does not exist");
            UseCaseError::CampDoesNotExist
        })?;

        let speaker_id = data.speaker_id.ok_or_else(|| {
            tracing::warn!(moniker, "Cannot create talk: no speaker given");
            UseCaseError::SpeakerRequired
        })?;

        let speaker = self.camp_repository.get_speaker(speaker_id).await?.ok_or_else(|| {
            tracing::warn!(moniker, %speaker_id, "Cannot create talk: speaker not found");
            UseCaseError::SpeakerNotFound
        })?;

        let new_talk = NewTalk::new(&camp, speaker, data);

        let created = self.camp_repository.add_talk(&new_talk).await?.ok_or_else(|| {
            tracing::warn!(moniker, "Talk was not saved");
            UseCaseError::SaveNotAcknowledged(TALK_SAVE_FAILED.to_string())
        })?;

        tracing::info!(
            moniker,
            talk_id = %created.id(),
            speaker_id = %speaker_id,
            "Talk created successfully"
        );

        Ok(created)
    }
}
