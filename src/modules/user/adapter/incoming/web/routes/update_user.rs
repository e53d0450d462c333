use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::modules::user::application::ports::incoming::use_cases::{
    UpdateUserCommand, UpdateUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_response::UserResponse;

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "Jane Smith")]
    pub name: Option<String>,

    pub role: Option<UserRole>,
}

/// Update a user's name or role (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/{id}")]
pub async fn update_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    let dto = req.into_inner();
    let command = UpdateUserCommand {
        name: dto.name,
        role: dto.role,
    };

    match data.users.update.execute(user.caller(), user_id, command).await {
        Ok(updated) => ApiResponse::success(UserResponse::from(updated)),
        Err(UpdateUserError::Forbidden(v)) => policy_violation_response(&v),
        Err(UpdateUserError::InvalidInput(e)) => {
            warn!(user_id = %user_id, reason = %e, "User update rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "User update failed");
            ApiResponse::internal_error()
        }
    }
}
