//! Camp Use Cases
//!
//! Business logic for managing code camps.

mod create_camp;
mod delete_camp;
mod get_camp;
mod list_camps;
mod search_camps_by_date;
mod update_camp;

pub use create_camp::CreateCampUseCase;
pub use delete_camp::DeleteCampUseCase;
pub use get_camp::GetCampUseCase;
pub use list_camps::ListCampsUseCase;
pub use search_camps_by_date::SearchCampsByDateUseCase;
pub use update_camp::UpdateCampUseCase;
