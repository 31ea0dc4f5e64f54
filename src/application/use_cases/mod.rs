//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod camps;
pub mod talks;

#[cfg(test)]
pub(crate) mod fixtures;

pub use camps::{
    CreateCampUseCase, DeleteCampUseCase, GetCampUseCase, ListCampsUseCase, SearchCampsByDateUseCase,
    UpdateCampUseCase,
};
pub use talks::{CreateTalkUseCase, GetTalkUseCase, ListTalksUseCase};
