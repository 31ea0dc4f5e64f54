//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod camp;
pub mod speaker;
pub mod talk;

pub use camp::{Camp, CampId, CreateCampData, Location, UpdateCampData};
pub use speaker::{Speaker, SpeakerId};
pub use talk::{CreateTalkData, NewTalk, Talk, TalkId};
