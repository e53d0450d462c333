use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::login_user::AuthTokenResponse;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// At least 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,

    #[schema(example = "Jane Doe")]
    pub name: String,

    /// Defaults to `customer`
    pub role: Option<UserRole>,
}

/// Register a new account
///
/// Creates the user and returns a bearer token for it.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<AuthTokenResponse>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Password must be at least 8 characters long"
                }
            })
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_ALREADY_EXISTS",
                    "message": "A user with this email already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    info!(email = %dto.email, "Registration attempt");

    let input = RegisterUserInput {
        email: dto.email,
        password: dto.password,
        name: dto.name,
        role: dto.role,
    };

    match data.auth.register.execute(input).await {
        Ok(session) => ApiResponse::created(AuthTokenResponse::from(session)),

        Err(RegisterUserError::InvalidInput(e)) => {
            warn!(reason = %e, "Registration rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(RegisterUserError::UserAlreadyExists) => ApiResponse::conflict(
            "USER_ALREADY_EXISTS",
            "A user with this email already exists",
        ),

        Err(e @ RegisterUserError::HashingFailed(_))
        | Err(e @ RegisterUserError::TokenGenerationFailed(_))
        | Err(e @ RegisterUserError::RepositoryError(_)) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
