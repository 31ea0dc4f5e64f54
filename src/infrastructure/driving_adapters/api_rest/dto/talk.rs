//! Talk DTOs
//!
//! Data transfer objects for the talk endpoints nested under a camp.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::speaker::{Speaker, SpeakerId};
use crate::domain::models::talk::{CreateTalkData, Talk};

/// Reference to an existing speaker inside a talk request
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRefDto {
    pub speaker_id: Option<i32>,
}

/// DTO for creating a talk
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateTalkDto {
    #[validate(required(message = "title is required"))]
    #[validate(length(min = 1, max = 100, message = "title must be between 1 and 100 characters"))]
    pub title: Option<String>,

    #[serde(rename = "abstract")]
    #[validate(required(message = "abstract is required"))]
    #[validate(length(min = 20, max = 4000, message = "abstract must be between 20 and 4000 characters"))]
    pub abstract_text: Option<String>,

    #[validate(required(message = "level is required"))]
    #[validate(range(min = 100, max = 300, message = "level must be between 100 and 300"))]
    pub level: Option<i32>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub speaker: Option<SpeakerRefDto>,
}

impl CreateTalkDto {
    /// Convert into creation data once `validate()` has passed.
    ///
    /// The speaker reference stays optional here: its absence is a
    /// business rule checked after the camp lookup.
    #[must_use]
    pub fn into_create_data(self) -> Option<CreateTalkData> {
        Some(CreateTalkData {
            title: self.title?,
            abstract_text: self.abstract_text?,
            level: self.level?,
            tags: self.tags,
            speaker_id: self.speaker.and_then(|s| s.speaker_id).map(SpeakerId::new),
        })
    }
}

/// Speaker response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerModel {
    pub speaker_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}

impl From<&Speaker> for SpeakerModel {
    fn from(speaker: &Speaker) -> Self {
        Self {
            speaker_id: speaker.id.value(),
            first_name: speaker.first_name.clone(),
            middle_name: speaker.middle_name.clone(),
            last_name: speaker.last_name.clone(),
            bio: speaker.bio.clone(),
            company: speaker.company.clone(),
            company_url: speaker.company_url.clone(),
            blog_url: speaker.blog_url.clone(),
            twitter: speaker.twitter.clone(),
            git_hub: speaker.github.clone(),
        }
    }
}

/// Talk response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkModel {
    pub talk_id: i32,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub level: i32,
    pub tags: Vec<String>,
    pub camp_moniker: String,
    pub speaker: SpeakerModel,
}

impl From<&Talk> for TalkModel {
    fn from(talk: &Talk) -> Self {
        Self {
            talk_id: talk.id().value(),
            title: talk.title().to_string(),
            abstract_text: talk.abstract_text().to_string(),
            level: talk.level(),
            tags: talk.tags().to_vec(),
            camp_moniker: talk.camp_moniker().to_string(),
            speaker: SpeakerModel::from(talk.speaker()),
        }
    }
}

impl From<Talk> for TalkModel {
    fn from(talk: Talk) -> Self {
        Self::from(&talk)
    }
}
