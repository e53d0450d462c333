use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthRejection {
    #[error("Missing or invalid authorization header")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User no longer exists")]
    UnknownUser,

    #[error("Account is suspended")]
    Suspended,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns an `Authorization` header into the [`Caller`] a request runs as.
///
/// The token only proves who the caller was when it was issued. The user is
/// reloaded on every request so deletion, suspension and role changes take
/// effect immediately.
#[derive(Clone)]
pub struct Authenticator {
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    users: Arc<dyn UserQuery + Send + Sync>,
}

impl Authenticator {
    pub fn new(
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        users: Arc<dyn UserQuery + Send + Sync>,
    ) -> Self {
        Self { tokens, users }
    }

    pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
        authorization?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Caller, AuthRejection> {
        let token = Self::bearer_token(authorization).ok_or(AuthRejection::MissingToken)?;

        let claims = self.tokens.verify_token(token).map_err(|e| {
            debug!(error = %e, "Bearer token rejected");
            AuthRejection::InvalidToken
        })?;

        let user_id = UserId::from(claims.user_id);
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| AuthRejection::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Token presented for a user that no longer exists");
                AuthRejection::UnknownUser
            })?;

        if user.is_suspended {
            warn!(user_id = %user_id, "Suspended user presented a valid token");
            return Err(AuthRejection::Suspended);
        }

        Ok(Caller::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::{User, UserRole};
    use crate::auth::application::ports::outgoing::{
        TokenClaims, TokenError, UserQueryError,
    };

    /* ---- Mocks ---- */

    struct FixedTokens {
        claims: Result<TokenClaims, TokenError>,
    }

    impl TokenProvider for FixedTokens {
        fn issue_token(&self, _: UserId, _: &str, _: UserRole) -> Result<String, TokenError> {
            unimplemented!("not used in these tests")
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            self.claims.clone()
        }
    }

    struct SingleUserQuery {
        user: Option<User>,
        fail: bool,
    }

    #[async_trait]
    impl UserQuery for SingleUserQuery {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
            if self.fail {
                return Err(UserQueryError::DatabaseError("connection reset".into()));
            }
            Ok(self.user.clone().filter(|u| u.id == user_id))
        }

        async fn find_by_email(&self, _: &str) -> Result<Option<User>, UserQueryError> {
            unimplemented!("not used in these tests")
        }

        async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
            unimplemented!("not used in these tests")
        }
    }

    fn user(role: UserRole, suspended: bool) -> User {
        User {
            id: UserId::new(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Jane".to_string(),
            role,
            is_suspended: suspended,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn claims_for(user_id: Uuid, role: UserRole) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: "jane@example.com".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "helpdesk".to_string(),
            user_id,
            email: "jane@example.com".to_string(),
            role,
        }
    }

    fn authenticator(
        claims: Result<TokenClaims, TokenError>,
        user: Option<User>,
        fail: bool,
    ) -> Authenticator {
        Authenticator::new(
            Arc::new(FixedTokens { claims }),
            Arc::new(SingleUserQuery { user, fail }),
        )
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(Authenticator::bearer_token(Some("Bearer abc")), Some("abc"));
        assert_eq!(Authenticator::bearer_token(Some("Basic abc")), None);
        assert_eq!(Authenticator::bearer_token(Some("Bearer ")), None);
        assert_eq!(Authenticator::bearer_token(None), None);
    }

    #[tokio::test]
    async fn test_authenticate_uses_current_stored_role() {
        // Token was issued while the user was a customer; they have since been promoted
        let stored = user(UserRole::Agent, false);
        let auth = authenticator(
            Ok(claims_for(stored.id.value(), UserRole::Customer)),
            Some(stored.clone()),
            false,
        );

        let caller = auth.authenticate(Some("Bearer token")).await.unwrap();

        assert_eq!(caller.id, stored.id);
        assert_eq!(caller.role, UserRole::Agent);
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let auth = authenticator(Err(TokenError::MalformedToken), None, false);
        let result = auth.authenticate(None).await;
        assert_eq!(result, Err(AuthRejection::MissingToken));
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected() {
        let auth = authenticator(Err(TokenError::TokenExpired), None, false);
        let result = auth.authenticate(Some("Bearer expired")).await;
        assert_eq!(result, Err(AuthRejection::InvalidToken));
    }

    #[tokio::test]
    async fn test_deleted_user_is_rejected() {
        let auth = authenticator(
            Ok(claims_for(Uuid::new_v4(), UserRole::Admin)),
            None,
            false,
        );
        let result = auth.authenticate(Some("Bearer token")).await;
        assert_eq!(result, Err(AuthRejection::UnknownUser));
    }

    #[tokio::test]
    async fn test_suspended_user_is_rejected() {
        let stored = user(UserRole::Customer, true);
        let auth = authenticator(
            Ok(claims_for(stored.id.value(), UserRole::Customer)),
            Some(stored),
            false,
        );
        let result = auth.authenticate(Some("Bearer token")).await;
        assert_eq!(result, Err(AuthRejection::Suspended));
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let auth = authenticator(
            Ok(claims_for(Uuid::new_v4(), UserRole::Admin)),
            None,
            true,
        );
        let result = auth.authenticate(Some("Bearer token")).await;
        assert!(matches!(result, Err(AuthRejection::RepositoryError(_))));
    }
}
