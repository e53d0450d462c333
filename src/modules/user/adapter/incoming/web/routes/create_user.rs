use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::auth::application::domain::entities::UserRole;
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_response::UserResponse;

#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "agent@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,

    #[schema(example = "Alex Agent")]
    pub name: String,

    /// Defaults to `customer`
    pub role: Option<UserRole>,
}

/// Create a user (admin only)
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/users")]
pub async fn create_user_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = CreateUserCommand {
        email: dto.email,
        password: dto.password,
        name: dto.name,
        role: dto.role,
    };

    match data.users.create.execute(user.caller(), command).await {
        Ok(created) => ApiResponse::created(UserResponse::from(created)),

        Err(CreateUserError::Forbidden(v)) => policy_violation_response(&v),

        Err(CreateUserError::InvalidInput(e)) => {
            warn!(reason = %e, "User creation rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(CreateUserError::UserAlreadyExists) => ApiResponse::conflict(
            "USER_ALREADY_EXISTS",
            "A user with this email already exists",
        ),

        Err(e @ CreateUserError::HashingFailed(_))
        | Err(e @ CreateUserError::RepositoryError(_)) => {
            error!(error = %e, "User creation failed");
            ApiResponse::internal_error()
        }
    }
}
