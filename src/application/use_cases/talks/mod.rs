//! Talk Use Cases
//!
//! Business logic for the talks of a camp.

mod create_talk;
mod get_talk;
mod list_talks;

pub use create_talk::CreateTalkUseCase;
pub use get_talk::GetTalkUseCase;
pub use list_talks::ListTalksUseCase;
