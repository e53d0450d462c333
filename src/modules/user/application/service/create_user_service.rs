use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::domain::entities::{Caller, User};
use crate::auth::application::domain::new_user::NewUser;
use crate::auth::application::domain::policy::require_admin;
use crate::auth::application::ports::outgoing::user_repository::CreateUserData;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> CreateUserUseCase for CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        command: CreateUserCommand,
    ) -> Result<User, CreateUserError> {
        require_admin(caller)?;

        let new_user = NewUser::new(command.email, command.password, command.name, command.role)?;

        let existing = self
            .user_query
            .find_by_email(new_user.email())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(new_user.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let user = self
            .user_repository
            .create_user(CreateUserData {
                email: new_user.email().to_string(),
                password_hash,
                name: new_user.name().to_string(),
                role: new_user.role(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => {
                    error!(error = %other, "Failed to store user");
                    CreateUserError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %user.id, created_by = %caller.id, role = %user.role, "User created by admin");
        Ok(user)
    }
}
