//! Camp Repository Gateway
//!
//! Abstract trait defining the contract for camp, talk and speaker
//! persistence operations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::camp::{Camp, CreateCampData};
use crate::domain::models::speaker::{Speaker, SpeakerId};
use crate::domain::models::talk::{NewTalk, Talk, TalkId};
use crate::shared::errors::RepositoryError;

/// Repository trait for camps and everything hanging off them.
///
/// Write operations report whether storage actually wrote anything:
/// `Ok(None)` / `Ok(false)` means the call completed but no change was
/// persisted, which is distinct from an `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// Find all camps, newest event first
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, RepositoryError>;

    /// Find a camp by its moniker
    async fn get_camp(&self, moniker: &str, include_talks: bool) -> Result<Option<Camp>, RepositoryError>;

    /// Find all camps taking place on the given date
    async fn get_camps_by_event_date(
        &self,
        event_date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, RepositoryError>;

    /// Find the talks of a camp. `None` when no camp has that moniker.
    async fn get_talks_by_moniker(&self, moniker: &str) -> Result<Option<Vec<Talk>>, RepositoryError>;

    /// Find one talk of a camp
    async fn get_talk(&self, moniker: &str, talk_id: TalkId) -> Result<Option<Talk>, RepositoryError>;

    /// Find a speaker by id
    async fn get_speaker(&self, speaker_id: SpeakerId) -> Result<Option<Speaker>, RepositoryError>;

    /// Store a new camp
    async fn add_camp(&self, data: &CreateCampData) -> Result<Option<Camp>, RepositoryError>;

    /// Persist the current state of an existing camp
    async fn update_camp(&self, camp: &Camp) -> Result<Option<Camp>, RepositoryError>;

    /// Delete a camp together with its talks
    async fn delete_camp(&self, camp: &Camp) -> Result<bool, RepositoryError>;

    /// Store a new talk
    async fn add_talk(&self, talk: &NewTalk) -> Result<Option<Talk>, RepositoryError>;
}
