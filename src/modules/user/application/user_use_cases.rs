use std::sync::Arc;

use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetCurrentUserUseCase, GetUserUseCase,
    ListUsersUseCase, ResetPasswordUseCase, SuspendUserUseCase, UpdateUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub me: Arc<dyn GetCurrentUserUseCase + Send + Sync>,
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub suspend: Arc<dyn SuspendUserUseCase + Send + Sync>,
}
