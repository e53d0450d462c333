use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::domain::new_user::{NewUser, NewUserError};
use crate::auth::application::ports::outgoing::{
    user_repository::CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserRepository,
    UserRepositoryError,
};

// ========================= Register Input =========================
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Option<UserRole>,
}

// ========================= Register Error =========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    InvalidInput(#[from] NewUserError),

    #[error("A user with this email already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// A freshly authenticated user and the token they should present next.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

// ========================= Register Use Case =========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthSession, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthSession, RegisterUserError> {
        let new_user = NewUser::new(input.email, input.password, input.name, input.role)?;

        let existing = self
            .query
            .find_by_email(new_user.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(new_user.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // The unique index still guards against a concurrent registration
        let user = self
            .repository
            .create_user(CreateUserData {
                email: new_user.email().to_string(),
                password_hash,
                name: new_user.name().to_string(),
                role: new_user.role(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .issue_token(user.id, &user.email, user.role)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthSession { token, user })
    }
}
