//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod camp;
pub mod talk;

pub use camp::{
    CampModel, CampsEnvelope, CreateCampDto, IncludeTalksQuery, SearchCampsQuery, UpdateCampDto,
};
pub use talk::{CreateTalkDto, SpeakerModel, SpeakerRefDto, TalkModel};
