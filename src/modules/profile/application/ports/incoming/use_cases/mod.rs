pub mod get_profile;
pub mod profile_entries;
pub mod profile_error;
pub mod upsert_profile;

pub use get_profile::GetProfileUseCase;
pub use profile_entries::ProfileEntriesUseCase;
pub use profile_error::{ProfileError, HANDLE_KEY};
pub use upsert_profile::{UpsertProfileOutcome, UpsertProfileUseCase};
