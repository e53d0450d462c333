use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    policy_violation_response, AuthenticatedUser,
};
use crate::modules::settings::application::ports::incoming::use_cases::UpdateEmailSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::email_settings_dto::EmailSettingsDto;

/// Replace the mail server settings
#[utoipa::path(
    post,
    path = "/api/v1/settings/email",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = EmailSettingsDto,
    responses(
        (status = 200, description = "Settings stored", body = inline(SuccessResponse<EmailSettingsDto>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/settings/email")]
pub async fn update_email_settings_handler(
    user: AuthenticatedUser,
    req: web::Json<EmailSettingsDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let settings = req.into_inner().into();

    match data
        .settings
        .update_email
        .execute(user.caller(), settings)
        .await
    {
        Ok(saved) => ApiResponse::success(EmailSettingsDto::from(saved)),
        Err(UpdateEmailSettingsError::Forbidden(v)) => policy_violation_response(&v),
        Err(UpdateEmailSettingsError::InvalidInput(e)) => {
            warn!(reason = %e, "Email settings rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateEmailSettingsError::RepositoryError(e)) => {
            error!(error = %e, "Failed to save email settings");
            ApiResponse::internal_error()
        }
    }
}
