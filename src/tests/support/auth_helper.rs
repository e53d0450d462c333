use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::helpers::Authenticator;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::tests::support::in_memory::InMemoryUserStore;

pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-at-least-32-chars";

pub fn test_token_provider() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "helpdesk-test".to_string(),
        access_token_expiry: 3600,
    })
}

/// A user store plus an authenticator reading from it, so handler tests can
/// mint real bearer tokens and still suspend or delete the users behind them.
pub struct TestAuth {
    pub users: InMemoryUserStore,
    pub tokens: JwtTokenService,
    pub authenticator: web::Data<Authenticator>,
}

impl TestAuth {
    pub fn new() -> Self {
        Self::with_store(InMemoryUserStore::default())
    }

    pub fn with_store(users: InMemoryUserStore) -> Self {
        let tokens = test_token_provider();
        let authenticator = web::Data::new(Authenticator::new(
            Arc::new(tokens.clone()),
            Arc::new(users.clone()),
        ));

        Self {
            users,
            tokens,
            authenticator,
        }
    }

    pub fn add_user(&self, email: &str, role: UserRole) -> User {
        self.users.insert(email, "password123", role)
    }

    /// `Authorization` header value for `user`.
    pub fn bearer(&self, user: &User) -> String {
        let token = self
            .tokens
            .issue_token(user.id, &user.email, user.role)
            .expect("test token should be issued");
        format!("Bearer {}", token)
    }
}
