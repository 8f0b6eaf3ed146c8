use std::sync::Arc;

use crate::auth::application::orchestrator::account_deletion::DeleteAccountUseCase;
use crate::auth::application::use_cases::{
    fetch_current_user::FetchCurrentUserUseCase, login_user::LoginUserUseCase,
    register_user::RegisterUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub current_user: Arc<dyn FetchCurrentUserUseCase + Send + Sync>,
    pub delete_account: Arc<dyn DeleteAccountUseCase + Send + Sync>,
}
