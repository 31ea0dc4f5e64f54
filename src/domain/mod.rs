//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::camp_repository::CampRepository;
pub use models::camp::{Camp, CampId, CreateCampData, Location, UpdateCampData};
pub use models::speaker::{Speaker, SpeakerId};
pub use models::talk::{CreateTalkData, NewTalk, Talk, TalkId};
