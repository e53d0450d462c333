use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    policy_violation_response, AuthenticatedUser,
};
use crate::modules::settings::application::ports::incoming::use_cases::GetEmailSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::email_settings_dto::EmailSettingsDto;

/// Read the mail server settings
///
/// Stores and returns defaults the first time it is called.
#[utoipa::path(
    get,
    path = "/api/v1/settings/email",
    tag = "settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current settings", body = inline(SuccessResponse<EmailSettingsDto>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/settings/email")]
pub async fn get_email_settings_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.settings.get_email.execute(user.caller()).await {
        Ok(settings) => ApiResponse::success(EmailSettingsDto::from(settings)),
        Err(GetEmailSettingsError::Forbidden(v)) => policy_violation_response(&v),
        Err(GetEmailSettingsError::RepositoryError(e)) => {
            error!(error = %e, "Failed to load email settings");
            ApiResponse::internal_error()
        }
    }
}
