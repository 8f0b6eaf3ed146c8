pub mod get_profile_service;
pub mod profile_entries_service;
pub mod profile_views;
pub mod upsert_profile_service;

pub use get_profile_service::GetProfileService;
pub use profile_entries_service::ProfileEntriesService;
pub use profile_views::ProfileViews;
pub use upsert_profile_service::UpsertProfileService;
