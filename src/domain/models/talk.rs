//! Talk Domain Model
//!
//! A talk belongs to exactly one camp and is given by exactly one speaker.

use super::camp::{Camp, CampId};
use super::speaker::{Speaker, SpeakerId};

/// Newtype wrapper for Talk ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TalkId(i32);

impl TalkId {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for TalkId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TalkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data supplied by a client to create a talk.
///
/// The speaker reference is optional here because the create flow has to
/// reject its absence with a dedicated reason.
#[derive(Debug, Clone)]
pub struct CreateTalkData {
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub tags: Vec<String>,
    pub speaker_id: Option<SpeakerId>,
}

/// A talk that has been linked to its camp and speaker but not stored yet
#[derive(Debug, Clone)]
pub struct NewTalk {
    camp_id: CampId,
    camp_moniker: String,
    speaker: Speaker,
    title: String,
    abstract_text: String,
    level: i32,
    tags: Vec<String>,
}

impl NewTalk {
    #[must_use]
    pub fn new(camp: &Camp, speaker: Speaker, data: CreateTalkData) -> Self {
        Self {
            camp_id: camp.id(),
            camp_moniker: camp.moniker().to_string(),
            speaker,
            title: data.title,
            abstract_text: data.abstract_text,
            level: data.level,
            tags: data.tags,
        }
    }

    /// Turn into a persisted talk once storage has assigned an id
    #[must_use]
    pub fn into_talk(self, id: TalkId) -> Talk {
        Talk {
            id,
            camp_id: self.camp_id,
            camp_moniker: self.camp_moniker,
            speaker: self.speaker,
            title: self.title,
            abstract_text: self.abstract_text,
            level: self.level,
            tags: self.tags,
        }
    }

    #[must_use]
    pub fn camp_id(&self) -> CampId {
        self.camp_id
    }

    #[must_use]
    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    #[must_use]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Talk domain entity
#[derive(Debug, Clone)]
pub struct Talk {
    id: TalkId,
    camp_id: CampId,
    camp_moniker: String,
    speaker: Speaker,
    title: String,
    abstract_text: String,
    level: i32,
    tags: Vec<String>,
}

impl Talk {
    /// Restore a Talk from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TalkId,
        camp_id: CampId,
        camp_moniker: String,
        speaker: Speaker,
        title: String,
        abstract_text: String,
        level: i32,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            camp_id,
            camp_moniker,
            speaker,
            title,
            abstract_text,
            level,
            tags,
        }
    }

    /// Copy of this talk re-pointed at a renamed camp
    #[must_use]
    pub fn with_camp_moniker(self, camp_moniker: String) -> Self {
        Self { camp_moniker, ..self }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> TalkId {
        self.id
    }

    #[must_use]
    pub fn camp_id(&self) -> CampId {
        self.camp_id
    }

    #[must_use]
    pub fn camp_moniker(&self) -> &str {
        &self.camp_moniker
    }

    #[must_use]
    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    #[must_use]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
