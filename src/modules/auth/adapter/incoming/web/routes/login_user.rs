use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::AuthSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct AuthTokenResponse {
    /// Signed HS256 bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    pub user: SessionUser,
}

#[derive(Serialize, ToSchema)]
pub struct SessionUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "Jane Doe")]
    pub name: String,

    pub role: UserRole,
}

impl From<AuthSession> for AuthTokenResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: SessionUser {
                id: session.user.id.value(),
                email: session.user.email,
                name: session.user.name,
                role: session.user.role,
            },
        }
    }
}

/// User login
///
/// Authenticates a user with email and password and returns a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<AuthTokenResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "email": "jane@example.com",
                        "name": "Jane Doe",
                        "role": "customer"
                    }
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 403,
            description = "Account is suspended",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCOUNT_SUSPENDED",
                    "message": "This account has been suspended"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.auth.login;
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(session) => ApiResponse::success(AuthTokenResponse::from(session)),

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountSuspended) => {
            ApiResponse::forbidden("ACCOUNT_SUSPENDED", "This account has been suspended")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{User, UserId};
    use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};

    // ========================================================================
    // Mock Use Cases
    // ========================================================================

    #[derive(Clone)]
    struct MockLogin {
        result: Result<(), LoginError>,
    }

    #[async_trait]
    impl ILoginUserUseCase for MockLogin {
        async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError> {
            self.result.clone()?;
            Ok(AuthSession {
                token: "signed.jwt.token".to_string(),
                user: User {
                    id: UserId::new(),
                    email: request.email().to_string(),
                    password_hash: "hash".to_string(),
                    name: "Jane".to_string(),
                    role: UserRole::Customer,
                    is_suspended: false,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                },
            })
        }
    }

    async fn call_login(mock: MockLogin, body: Value) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default().with_login_user(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_login_success() {
        let (status, body) = call_login(
            MockLogin { result: Ok(()) },
            json!({ "email": "Jane@Example.com", "password": "password123" }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token"], "signed.jwt.token");
        assert_eq!(body["data"]["user"]["email"], "jane@example.com");
        assert!(body["data"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let (status, body) = call_login(
            MockLogin {
                result: Err(LoginError::InvalidCredentials),
            },
            json!({ "email": "jane@example.com", "password": "wrong" }),
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_suspended() {
        let (status, body) = call_login(
            MockLogin {
                result: Err(LoginError::AccountSuspended),
            },
            json!({ "email": "jane@example.com", "password": "password123" }),
        )
        .await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "ACCOUNT_SUSPENDED");
    }

    #[actix_web::test]
    async fn test_login_malformed_email_reaches_use_case() {
        let (status, body) = call_login(
            MockLogin { result: Ok(()) },
            json!({ "email": "Not-An-Email", "password": "password123" }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["user"]["email"], "not-an-email");

        let (status, body) = call_login(
            MockLogin {
                result: Err(LoginError::InvalidCredentials),
            },
            json!({ "email": "not-an-email", "password": "password123" }),
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_malformed_body() {
        let (status, body) = call_login(
            MockLogin { result: Ok(()) },
            json!({ "email": "jane@example.com" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_store_failure() {
        let (status, body) = call_login(
            MockLogin {
                result: Err(LoginError::QueryError("connection reset".to_string())),
            },
            json!({ "email": "jane@example.com", "password": "password123" }),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
