use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, ProfileEntriesUseCase, UpsertProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
    pub entries: Arc<dyn ProfileEntriesUseCase + Send + Sync>,
}
