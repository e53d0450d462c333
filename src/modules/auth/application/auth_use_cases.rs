use std::sync::Arc;

use super::use_cases::{login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
}
